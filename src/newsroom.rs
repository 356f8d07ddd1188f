// src/newsroom.rs
//! The functional interface the transport layer calls into.
//!
//! `Newsroom` is a cheap, cloneable handle over one store/index pair and one
//! analyzer. Ingestion stores the article (and indexes it) before returning;
//! everything else is a read or a single-article update.

use metrics::{counter, gauge};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::analyze::{Analysis, Analyzer};
use crate::article::{Article, NewArticle};
use crate::config::PulseConfig;
use crate::error::Result;
use crate::metrics::{
    ensure_metrics_described, ANALYZE_REQUESTS, ARTICLES_INGESTED, ARTICLES_STORED,
    FAVORITE_UPDATES, SEARCH_QUERIES,
};
use crate::search::SearchIndex;
use crate::store::ArticleStore;

/// Label used in `Stats::by_sentiment` for articles never analysed.
pub const UNSCORED: &str = "unscored";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub favorites: usize,
    pub by_sentiment: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct Newsroom {
    store: Arc<ArticleStore>,
    analyzer: Arc<Analyzer>,
    enrich_on_ingest: bool,
}

impl Newsroom {
    pub fn new(analyzer: Analyzer, enrich_on_ingest: bool) -> Self {
        ensure_metrics_described();
        let index = Arc::new(SearchIndex::new());
        Self {
            store: Arc::new(ArticleStore::new(index)),
            analyzer: Arc::new(analyzer),
            enrich_on_ingest,
        }
    }

    pub fn from_config(cfg: &PulseConfig) -> anyhow::Result<Self> {
        Ok(Self::new(cfg.analyzer()?, cfg.enrich_on_ingest))
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Store a new article. Fails with `InvalidInput` when the text fields are absent.
    pub fn ingest(&self, fields: Map<String, Value>) -> Result<Article> {
        self.ingest_new(NewArticle::from_fields(fields)?)
    }

    /// Same as [`ingest`](Self::ingest) for a raw request body.
    pub fn ingest_json(&self, body: &str) -> Result<Article> {
        self.ingest_new(NewArticle::from_json(body)?)
    }

    pub fn ingest_new(&self, mut new: NewArticle) -> Result<Article> {
        if self.enrich_on_ingest {
            let analysis = self.analyzer.analyze(&new.content);
            new.sentiment = Some(analysis.sentiment);
            new.reading_time = Some(analysis.reading_time);
        }
        let id = self.store.put(new);

        counter!(ARTICLES_INGESTED).increment(1);
        gauge!(ARTICLES_STORED).set(self.store.len() as f64);

        let article = self.store.get(&id)?;
        info!(target: "newsroom", %id, title = %article.title, "article ingested");
        Ok(article)
    }

    pub fn get(&self, id: &str) -> Result<Article> {
        self.store.get(id)
    }

    pub fn list_articles(&self) -> Vec<Article> {
        self.store.list()
    }

    pub fn list_favorites(&self) -> Vec<Article> {
        self.store
            .list()
            .into_iter()
            .filter(|a| a.is_favorite)
            .collect()
    }

    pub fn set_favorite(&self, id: &str, favorite: bool) -> Result<Article> {
        let article = self.store.set_favorite(id, favorite)?;
        counter!(FAVORITE_UPDATES).increment(1);
        Ok(article)
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<Article> {
        counter!(SEARCH_QUERIES).increment(1);
        self.store.index().search(query, limit)
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        counter!(ANALYZE_REQUESTS).increment(1);
        let analysis = self.analyzer.analyze(text);
        debug!(
            target: "newsroom",
            score = analysis.sentiment_score,
            keywords = analysis.keywords.len(),
            "text analyzed"
        );
        analysis
    }

    /// Re-run analysis over a stored article's body and attach the results.
    pub fn analyze_article(&self, id: &str) -> Result<Article> {
        let article = self.store.get(id)?;
        let analysis = self.analyze(&article.content);
        self.store.annotate(id, &analysis)
    }

    pub fn stats(&self) -> Stats {
        let articles = self.store.list();
        let mut by_sentiment = BTreeMap::new();
        for a in &articles {
            let key = a
                .sentiment
                .map(|p| p.as_str())
                .unwrap_or(UNSCORED)
                .to_string();
            *by_sentiment.entry(key).or_insert(0) += 1;
        }
        Stats {
            total: articles.len(),
            favorites: articles.iter().filter(|a| a.is_favorite).count(),
            by_sentiment,
        }
    }
}

impl Default for Newsroom {
    fn default() -> Self {
        Self::new(Analyzer::default(), true)
    }
}
