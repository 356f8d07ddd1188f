// src/search.rs
//! Boolean-AND substring search over stored articles.
//!
//! Each entry keeps the lower-cased concatenation of `title` and `content`
//! (no separator between them) next to a snapshot of the article. A query is
//! split on whitespace into lower-cased terms; an article matches iff every
//! term is a substring of that haystack. Results come back in first-indexed
//! order, truncated to `limit`.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::article::Article;

#[derive(Debug)]
struct Entry {
    haystack: String,
    article: Article,
}

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    /// id → insertion sequence
    slots: HashMap<String, u64>,
    /// insertion sequence → entry (iteration order = first-indexed order)
    entries: BTreeMap<u64, Entry>,
}

#[derive(Debug, Default)]
pub struct SearchIndex {
    inner: RwLock<Inner>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or re-register an article. Re-indexing an id replaces its
    /// entry in place and keeps its position.
    pub fn index(&self, article: &Article) {
        let entry = Entry {
            haystack: haystack(article),
            article: article.clone(),
        };

        let mut guard = self.inner.write();
        let inner = &mut *guard;
        let seq = match inner.slots.get(&article.id).copied() {
            Some(seq) => seq,
            None => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                inner.slots.insert(article.id.clone(), seq);
                seq
            }
        };
        inner.entries.insert(seq, entry);
    }

    /// Up to `limit` articles containing every whitespace-separated query term.
    /// An empty or blank query matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Article> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();

        let inner = self.inner.read();
        let hits: Vec<Article> = inner
            .entries
            .values()
            .filter(|e| terms.iter().all(|t| e.haystack.contains(t)))
            .take(limit)
            .map(|e| e.article.clone())
            .collect();

        debug!(
            target: "search",
            terms = terms.len(),
            hits = hits.len(),
            limit,
            "search"
        );
        hits
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Title and content are joined without a boundary, so a term may match across
// the end of the title and the start of the content.
fn haystack(article: &Article) -> String {
    let mut s = String::with_capacity(article.title.len() + article.content.len());
    s.push_str(&article.title.to_lowercase());
    s.push_str(&article.content.to_lowercase());
    s
}
