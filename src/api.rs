use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::analyze::Analysis;
use crate::article::Article;
use crate::config::PulseConfig;
use crate::error::Result;
use crate::export;
use crate::newsroom::{Newsroom, Stats};

#[derive(Clone)]
pub struct AppState {
    pub newsroom: Newsroom,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(newsroom: Newsroom, cfg: &PulseConfig) -> Self {
        Self {
            newsroom,
            default_limit: cfg.search_default_limit,
        }
    }
}

/// Build the router with the default configuration.
pub fn router(newsroom: Newsroom) -> Router {
    create_router(newsroom, &PulseConfig::default())
}

pub fn create_router(newsroom: Newsroom, cfg: &PulseConfig) -> Router {
    let state = AppState::new(newsroom, cfg);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/articles", get(list_articles).post(create_article))
        .route("/api/articles/{id}", get(get_article))
        .route("/api/articles/{id}/favorite", put(set_favorite))
        .route("/api/articles/{id}/analyze", post(analyze_article))
        .route("/api/favorites", get(list_favorites))
        .route("/api/search", get(search))
        .route("/api/analyze", post(analyze))
        .route("/api/export/json", get(export_json))
        .route("/api/export/csv", get(export_csv))
        .route("/api/stats", get(stats))
        .layer(CorsLayer::very_permissive())
        .layer(GlobalConcurrencyLimitLayer::new(cfg.max_concurrency))
        .with_state(state)
}

async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.newsroom.list_articles())
}

// Raw bodies: any content type is accepted and JSON errors map to PulseError.
async fn create_article(State(state): State<AppState>, body: String) -> Result<Json<Article>> {
    let article = state.newsroom.ingest_json(&body).inspect_err(|e| {
        warn!(target: "api", error = %e, "rejected article");
    })?;
    Ok(Json(article))
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>> {
    Ok(Json(state.newsroom.get(&id)?))
}

#[derive(Deserialize)]
struct FavoriteReq {
    is_favorite: bool,
}

async fn set_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<Article>> {
    let req: FavoriteReq = serde_json::from_str(&body)?;
    Ok(Json(state.newsroom.set_favorite(&id, req.is_favorite)?))
}

async fn analyze_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>> {
    Ok(Json(state.newsroom.analyze_article(&id)?))
}

async fn list_favorites(State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.newsroom.list_favorites())
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Article>> {
    let limit = params.limit.unwrap_or(state.default_limit);
    Json(state.newsroom.search(&params.q, limit))
}

#[derive(Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: String,
}

async fn analyze(State(state): State<AppState>, body: String) -> Result<Json<Analysis>> {
    let req: AnalyzeReq = serde_json::from_str(&body)?;
    Ok(Json(state.newsroom.analyze(&req.text)))
}

async fn export_json(State(state): State<AppState>) -> Response {
    match export::to_json(&state.newsroom.list_articles()) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CONTENT_DISPOSITION, "attachment; filename=articles.json"),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!(target: "api", error = %e, "json export failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "export failed").into_response()
        }
    }
}

async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let body = export::to_csv(&state.newsroom.list_articles());
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=articles.csv"),
        ],
        body,
    )
}

async fn stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.newsroom.stats())
}
