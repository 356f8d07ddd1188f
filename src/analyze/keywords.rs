//! Keyword extraction: distinct tokens longer than a length threshold.

use std::collections::BTreeSet;

use crate::tokenize::tokenize;

/// Tokens of six or more characters are keywords by default.
pub const DEFAULT_LONGER_THAN: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor {
    /// Tokens must be strictly longer than this (in characters).
    longer_than: usize,
}

impl KeywordExtractor {
    pub fn new(longer_than: usize) -> Self {
        Self { longer_than }
    }

    pub fn longer_than(&self) -> usize {
        self.longer_than
    }

    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        tokenize(text)
            .filter(|t| t.chars().count() > self.longer_than)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LONGER_THAN)
    }
}
