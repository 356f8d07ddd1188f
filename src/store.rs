//! # Article Store
//! Canonical in-memory collection of ingested articles.
//!
//! The store assigns identity (`id`, `saved_at`) and keeps articles in
//! ingestion order. Every write re-registers the article with the shared
//! `SearchIndex` before returning, so a search issued after `put` (or
//! `set_favorite`) returns can see the new state.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::analyze::Analysis;
use crate::article::{Article, NewArticle};
use crate::error::{PulseError, Result};
use crate::search::SearchIndex;

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<String, Article>,
    /// ids in ingestion order
    order: Vec<String>,
}

/// Thread-safe article collection bound to a search index.
#[derive(Debug)]
pub struct ArticleStore {
    inner: RwLock<Inner>,
    index: Arc<SearchIndex>,
}

impl ArticleStore {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            index,
        }
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// Store a new article and return its freshly generated id.
    pub fn put(&self, new: NewArticle) -> String {
        let saved_at = chrono::Utc::now().timestamp_millis();

        let article = {
            let mut inner = self.inner.write();
            // v4 collisions are practically impossible, but an id is never reused.
            let id = loop {
                let candidate = Uuid::new_v4().to_string();
                if !inner.by_id.contains_key(&candidate) {
                    break candidate;
                }
            };
            let article = Article::from_new(new, id.clone(), saved_at);
            inner.by_id.insert(id.clone(), article.clone());
            inner.order.push(id);
            // Indexed under the store lock so index updates apply in write order.
            self.index.index(&article);
            article
        };

        info!(target: "store", id = %article.id, "article stored");
        article.id
    }

    pub fn get(&self, id: &str) -> Result<Article> {
        self.inner
            .read()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| PulseError::not_found(id))
    }

    /// Snapshot of all articles in ingestion order.
    pub fn list(&self) -> Vec<Article> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect()
    }

    pub fn set_favorite(&self, id: &str, favorite: bool) -> Result<Article> {
        let updated = self.update(id, |a| a.is_favorite = favorite)?;
        info!(target: "store", %id, favorite, "favorite updated");
        Ok(updated)
    }

    /// Attach derived analysis fields to a stored article.
    pub fn annotate(&self, id: &str, analysis: &Analysis) -> Result<Article> {
        self.update(id, |a| a.apply_analysis(analysis))
    }

    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update<F>(&self, id: &str, f: F) -> Result<Article>
    where
        F: FnOnce(&mut Article),
    {
        let updated = {
            let mut inner = self.inner.write();
            let article = inner
                .by_id
                .get_mut(id)
                .ok_or_else(|| PulseError::not_found(id))?;
            f(article);
            self.index.index(article);
            article.clone()
        };
        Ok(updated)
    }
}
