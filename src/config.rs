// src/config.rs
//! Runtime configuration.
//!
//! Layers, lowest priority first:
//! 1) built-in defaults
//! 2) `$PULSE_CONFIG_PATH`, else `config/pulse.toml` if it exists (TOML or JSON)
//! 3) `PULSE_*` environment overrides

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::warn;

use crate::analyze::{keywords, reading_time, Analyzer, KeywordExtractor, ReadingTimeEstimator};
use crate::lexicon::Lexicon;
use crate::sentiment::SentimentScorer;

pub const ENV_CONFIG_PATH: &str = "PULSE_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/pulse.toml";

pub const ENV_READING_WPM: &str = "PULSE_READING_WPM";
pub const ENV_KEYWORD_LONGER_THAN: &str = "PULSE_KEYWORD_LONGER_THAN";
pub const ENV_SEARCH_LIMIT: &str = "PULSE_SEARCH_LIMIT";
pub const ENV_MAX_CONCURRENCY: &str = "PULSE_MAX_CONCURRENCY";
pub const ENV_ENRICH_ON_INGEST: &str = "PULSE_ENRICH_ON_INGEST";
pub const ENV_LEXICON_PATH: &str = "PULSE_LEXICON_PATH";

fn default_reading_wpm() -> u32 {
    reading_time::DEFAULT_WORDS_PER_MINUTE
}
fn default_keyword_longer_than() -> usize {
    keywords::DEFAULT_LONGER_THAN
}
fn default_search_limit() -> usize {
    20
}
fn default_max_concurrency() -> usize {
    10
}
fn default_enrich() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Words per minute for reading-time estimates.
    #[serde(default = "default_reading_wpm")]
    pub reading_speed_wpm: u32,
    /// Keywords must be strictly longer than this many characters.
    #[serde(default = "default_keyword_longer_than")]
    pub keyword_longer_than: usize,
    /// Limit used by the HTTP search route when the caller sends none.
    #[serde(default = "default_search_limit")]
    pub search_default_limit: usize,
    /// Maximum in-flight HTTP requests.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Attach sentiment and reading time to articles at ingestion.
    #[serde(default = "default_enrich")]
    pub enrich_on_ingest: bool,
    /// Lexicon file (JSON/TOML); `None` means the built-in reference lexicon.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            reading_speed_wpm: default_reading_wpm(),
            keyword_longer_than: default_keyword_longer_than(),
            search_default_limit: default_search_limit(),
            max_concurrency: default_max_concurrency(),
            enrich_on_ingest: default_enrich(),
            lexicon_path: None,
        }
    }
}

impl PulseConfig {
    /// Load an explicit file. `.json` is parsed as JSON, anything else as TOML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg: PulseConfig = if ext == "json" {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON config {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("parsing TOML config {}", path.display()))?
        };
        Ok(cfg.sanitized())
    }

    /// Defaults → config file → environment.
    pub fn from_env() -> Result<Self> {
        let base = if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from_file(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from_file(&default_p)?
            } else {
                Self::default()
            }
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_parse(ENV_READING_WPM) {
            self.reading_speed_wpm = v;
        }
        if let Some(v) = env_parse(ENV_KEYWORD_LONGER_THAN) {
            self.keyword_longer_than = v;
        }
        if let Some(v) = env_parse(ENV_SEARCH_LIMIT) {
            self.search_default_limit = v;
        }
        if let Some(v) = env_parse(ENV_MAX_CONCURRENCY) {
            self.max_concurrency = v;
        }
        if let Ok(raw) = env::var(ENV_ENRICH_ON_INGEST) {
            match parse_flag(&raw) {
                Some(b) => self.enrich_on_ingest = b,
                None => warn!(var = ENV_ENRICH_ON_INGEST, value = %raw, "ignoring invalid flag"),
            }
        }
        if let Ok(p) = env::var(ENV_LEXICON_PATH) {
            if !p.trim().is_empty() {
                self.lexicon_path = Some(PathBuf::from(p));
            }
        }
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.reading_speed_wpm = self.reading_speed_wpm.max(1);
        self.max_concurrency = self.max_concurrency.max(1);
        self
    }

    /// Load the configured lexicon, or the reference one.
    pub fn lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(p) => Lexicon::from_path(p),
            None => Ok(Lexicon::reference()),
        }
    }

    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::new(
            SentimentScorer::new(self.lexicon()?),
            KeywordExtractor::new(self.keyword_longer_than),
            ReadingTimeEstimator::new(self.reading_speed_wpm),
        ))
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable config override");
            None
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
