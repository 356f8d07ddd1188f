// src/analyze/mod.rs
//! Analysis pipeline entry: sentiment, keywords and reading time over one text.
//!
//! The three steps are independent; `Analyzer::analyze` runs each over the
//! same input and folds the results into a single `Analysis` record.

pub mod keywords;
pub mod reading_time;

use serde::Serialize;
use std::collections::BTreeSet;

use crate::sentiment::{Polarity, SentimentScorer};

// Re-export convenient types.
pub use crate::analyze::keywords::KeywordExtractor;
pub use crate::analyze::reading_time::ReadingTimeEstimator;

/// Combined result returned by `/api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub sentiment: Polarity,
    pub sentiment_score: i32,
    pub reading_time: u32,
    pub keywords: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    sentiment: SentimentScorer,
    keywords: KeywordExtractor,
    reading_time: ReadingTimeEstimator,
}

impl Analyzer {
    pub fn new(
        sentiment: SentimentScorer,
        keywords: KeywordExtractor,
        reading_time: ReadingTimeEstimator,
    ) -> Self {
        Self {
            sentiment,
            keywords,
            reading_time,
        }
    }

    pub fn sentiment(&self) -> &SentimentScorer {
        &self.sentiment
    }

    pub fn keywords(&self) -> &KeywordExtractor {
        &self.keywords
    }

    pub fn reading_time(&self) -> &ReadingTimeEstimator {
        &self.reading_time
    }

    /// Total: any text, including the empty string, yields a result.
    pub fn analyze(&self, text: &str) -> Analysis {
        let (sentiment_score, sentiment) = self.sentiment.score_and_label(text);
        Analysis {
            sentiment,
            sentiment_score,
            reading_time: self.reading_time.estimate(text),
            keywords: self.keywords.extract(text),
        }
    }
}
