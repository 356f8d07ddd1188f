//! Reading-time estimate from whitespace word count.

use crate::tokenize::word_count;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

#[derive(Debug, Clone, Copy)]
pub struct ReadingTimeEstimator {
    wpm: u32,
}

impl ReadingTimeEstimator {
    /// `wpm` of 0 is treated as 1.
    pub fn new(wpm: u32) -> Self {
        Self { wpm: wpm.max(1) }
    }

    pub fn words_per_minute(&self) -> u32 {
        self.wpm
    }

    /// Whole minutes, rounded up, never below 1.
    pub fn estimate(&self, text: &str) -> u32 {
        let words = word_count(text);
        let minutes = words.div_ceil(self.wpm as usize).max(1);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}
