use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const ARTICLES_INGESTED: &str = "pulse_articles_ingested_total";
pub const ARTICLES_STORED: &str = "pulse_articles_stored";
pub const SEARCH_QUERIES: &str = "pulse_search_queries_total";
pub const ANALYZE_REQUESTS: &str = "pulse_analyze_requests_total";
pub const FAVORITE_UPDATES: &str = "pulse_favorite_updates_total";

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(ARTICLES_INGESTED, "Articles accepted by ingest.");
        describe_gauge!(ARTICLES_STORED, "Articles currently held in the store.");
        describe_counter!(SEARCH_QUERIES, "Search queries served.");
        describe_counter!(ANALYZE_REQUESTS, "Text analyses run (ad hoc and per article).");
        describe_counter!(FAVORITE_UPDATES, "Favorite flag updates.");
    });
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Fails if one is already installed.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
