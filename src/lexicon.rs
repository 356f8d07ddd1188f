//! # Lexicon
//!
//! Word → signed weight mapping used by the sentiment scorer, split into a
//! positive and a negative partition.
//!
//! - Built-in `reference()` lexicon (six positive, six negative words).
//! - Loads from JSON or TOML with the shape
//!   `{ "positive": { "good": 1 }, "negative": { "bad": -1 } }`.
//! - Keys are trimmed and lower-cased, so lookups are case-insensitive.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashMap<String, i32>,
    negative: HashMap<String, i32>,
}

/// On-disk shape of a lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    positive: HashMap<String, i32>,
    #[serde(default)]
    negative: HashMap<String, i32>,
}

impl Lexicon {
    /// Build a lexicon from explicit partitions.
    ///
    /// Fails if a positive entry is not `> 0` or a negative entry is not `< 0`.
    pub fn new<P, N, K>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator<Item = (K, i32)>,
        N: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let mut pos = HashMap::new();
        for (word, weight) in positive {
            let key = normalize_key(word.as_ref());
            if weight <= 0 {
                bail!("positive lexicon entry '{key}' has non-positive weight {weight}");
            }
            pos.insert(key, weight);
        }

        let mut neg = HashMap::new();
        for (word, weight) in negative {
            let key = normalize_key(word.as_ref());
            if weight >= 0 {
                bail!("negative lexicon entry '{key}' has non-negative weight {weight}");
            }
            neg.insert(key, weight);
        }

        pos.remove("");
        neg.remove("");

        Ok(Self {
            positive: pos,
            negative: neg,
        })
    }

    /// The reference word list the service ships with.
    pub fn reference() -> Self {
        let positive = [
            ("good", 1),
            ("great", 2),
            ("excellent", 3),
            ("amazing", 3),
            ("success", 2),
            ("breakthrough", 2),
        ];
        let negative = [
            ("bad", -1),
            ("terrible", -3),
            ("horrible", -3),
            ("failure", -2),
            ("crisis", -2),
            ("disaster", -2),
        ];
        let to_owned = |(w, v): (&str, i32)| (w.to_string(), v);
        Self {
            positive: positive.into_iter().map(to_owned).collect(),
            negative: negative.into_iter().map(to_owned).collect(),
        }
    }

    /// Load a lexicon file. The format is picked from the extension
    /// (`.toml`, anything else is read as JSON).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&content, &ext)
            .with_context(|| format!("parsing lexicon {}", path.display()))
    }

    fn parse(content: &str, ext: &str) -> Result<Self> {
        let file: LexiconFile = if ext == "toml" {
            toml::from_str(content)?
        } else {
            serde_json::from_str(content)?
        };
        if file.positive.is_empty() && file.negative.is_empty() {
            return Err(anyhow!("lexicon has no entries"));
        }
        Self::new(file.positive, file.negative)
    }

    /// Combined weight for an already lower-cased token (0 when unknown).
    #[inline]
    pub fn weight(&self, token: &str) -> i32 {
        self.positive.get(token).copied().unwrap_or(0)
            + self.negative.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::reference()
    }
}

fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase()
}
