// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod article;
pub mod config;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod metrics;
pub mod newsroom;
pub mod search;
pub mod sentiment;
pub mod store;
pub mod tokenize;

// Analysis pipeline (sentiment + keywords + reading time)
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{Analysis, Analyzer};
pub use crate::api::router;
pub use crate::article::{Article, NewArticle};
pub use crate::config::PulseConfig;
pub use crate::error::PulseError;
pub use crate::lexicon::Lexicon;
pub use crate::newsroom::Newsroom;
pub use crate::search::SearchIndex;
pub use crate::sentiment::{Polarity, SentimentScorer};
pub use crate::store::ArticleStore;

/// Build the full application router from configuration: newsroom, API routes
/// and (optionally) a `/metrics` route backed by an installed recorder.
pub fn app(cfg: &PulseConfig, metrics: Option<&metrics::Metrics>) -> anyhow::Result<axum::Router> {
    let newsroom = Newsroom::from_config(cfg)?;
    let mut router = api::create_router(newsroom, cfg);
    if let Some(m) = metrics {
        router = router.merge(m.router());
    }
    Ok(router)
}
