use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

use crate::lexicon::Lexicon;
use crate::tokenize::tokenize;

/// Polarity label derived from the sign of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Polarity::Positive,
            s if s < 0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            "neutral" => Ok(Polarity::Neutral),
            other => Err(format!("unknown sentiment label '{other}'")),
        }
    }
}

/// Lexicon-driven scorer. The lexicon is injected, never global.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Sum of lexicon weights over all tokens; unknown tokens add 0.
    pub fn score(&self, text: &str) -> i32 {
        tokenize(text).map(|t| self.lexicon.weight(&t)).sum()
    }

    pub fn label(&self, text: &str) -> Polarity {
        Polarity::from_score(self.score(text))
    }

    /// Score and label in a single tokenizer pass.
    pub fn score_and_label(&self, text: &str) -> (i32, Polarity) {
        let score = self.score(text);
        (score, Polarity::from_score(score))
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::reference())
    }
}
