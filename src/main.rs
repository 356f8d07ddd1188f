//! news-pulse — Binary Entrypoint
//! Boots the Axum HTTP server: configuration, tracing, metrics and routes.

use news_pulse::{metrics::Metrics, PulseConfig};
use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing logs; `RUST_LOG` wins over the default filter.
/// Uses `try_init` so a subscriber installed by the host runtime is kept.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("news_pulse=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = PulseConfig::from_env().map_err(shuttle_runtime::Error::Custom)?;
    info!(
        wpm = cfg.reading_speed_wpm,
        keyword_longer_than = cfg.keyword_longer_than,
        max_concurrency = cfg.max_concurrency,
        lexicon = ?cfg.lexicon_path,
        "configuration loaded"
    );

    let metrics = match Metrics::init() {
        Ok(m) => Some(m),
        Err(e) => {
            warn!(error = ?e, "prometheus recorder not installed; /metrics disabled");
            None
        }
    };

    let router = news_pulse::app(&cfg, metrics.as_ref()).map_err(shuttle_runtime::Error::Custom)?;

    Ok(router.into())
}
