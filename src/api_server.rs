// Axum API Server Module
//
// Purpose: read-only REST API over the city catalog and the comparison engine.
// Comparison responses are memoized: the engine is a pure function of the city pair.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::data::{CityCatalog, LookupError};
use crate::insights::{generate_insights, ComparisonGenerator};
use crate::utils::image_paths::ImageResolver;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CityCatalog>,
    pub generator: Arc<ComparisonGenerator>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// Load the document and folder table named by `config`
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading city catalog...");
        let catalog = CityCatalog::load(&config.data_path)?;

        tracing::info!("Building image resolver (base URL {})...", config.image_base_url);
        let resolver = config.image_resolver()?;
        tracing::info!("Folder table has {} entries", resolver.folders().len());

        Ok(Self::from_parts(catalog, resolver))
    }

    pub fn from_parts(catalog: CityCatalog, resolver: ImageResolver) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(3600))
            .build();

        Self {
            catalog: Arc::new(catalog),
            generator: Arc::new(ComparisonGenerator::new(resolver)),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // City endpoints
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:id", get(get_city))
        .route("/api/cities/:id/images", get(get_city_images))
        .route("/api/cities/:id/quarters/:quarter_id", get(get_quarter))

        // Comparison endpoints
        .route("/api/compare/:city_a/:city_b", get(compare_cities))
        .route("/api/compare/:city_a/:city_b/insights", get(compare_insights))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "cities": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_cities(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let summaries = state.catalog.summaries();
    Ok(Json(serde_json::json!({
        "rows": summaries.len(),
        "data": summaries,
    })))
}

async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let city = state.catalog.city(&id)?;
    Ok(Json(serde_json::to_value(city)?))
}

async fn get_city_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let city = state.catalog.city(&id)?;
    let images = state.generator.resolver().city_images(city);
    Ok(Json(serde_json::json!({
        "city": city.id,
        "rows": images.len(),
        "data": images,
    })))
}

async fn get_quarter(
    State(state): State<AppState>,
    Path((id, quarter_id)): Path<(String, u32)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let quarter = state.catalog.quarter(&id, quarter_id)?;
    Ok(Json(serde_json::to_value(quarter)?))
}

async fn compare_cities(
    State(state): State<AppState>,
    Path((city_a, city_b)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("compare:{}:{}", city_a, city_b);

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let a = state.catalog.city(&city_a)?;
    let b = state.catalog.city(&city_b)?;
    let result = serde_json::to_value(state.generator.generate(a, b))?;

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn compare_insights(
    State(state): State<AppState>,
    Path((city_a, city_b)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("insights:{}:{}", city_a, city_b);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let a = state.catalog.city(&city_a)?;
    let b = state.catalog.city(&city_b)?;
    let insights = generate_insights(a, b);
    let result = serde_json::json!({
        "total": insights.total(),
        "urban_form": insights.urban_form,
        "morphology": insights.morphology,
        "daylight": insights.daylight,
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
