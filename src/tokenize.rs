//! Shared tokenizer: lower-cased word tokens for scoring and keyword extraction,
//! plus the whitespace word count used for reading time.
//!
//! Word characters are Unicode-aware on purpose, so accented letters stay inside
//! a token ("résumé" is one token, not "r"/"sum"); no other language-specific
//! handling is done.

use once_cell::sync::Lazy;
use regex::Regex;

// \w covers letters, digits and '_' (Unicode-aware).
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\w+").expect("word regex"));

/// Lazily yields lower-cased tokens, splitting on runs of non-word characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Counts maximal runs of non-whitespace characters.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
