//! HTTP routes for the film catalog.
//!
//! - `GET /health`
//! - `GET /api/catalog/films` (search, filter, sort)
//! - `GET /api/catalog/films/{id}`

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use catalog_model::{Film, FilmId};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::catalog_service::FilmCatalogService;
use crate::error::{AppError, AppResult};
use crate::params::SearchParams;

/// Shared handler state.
pub type AppState = Arc<FilmCatalogService>;

/// Build the full application [`Router`].
///
/// Used by both the binary and the integration tests, so both exercise the
/// same middleware stack.
pub fn build_app_router(service: FilmCatalogService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog/films", get(search_films))
        .route("/api/catalog/films/{id}", get(get_film_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/catalog/films?title=&genreIds=&genreNames=&releaseYear=&minRating=&originalLanguage=&sortBy=&sortDirection=
async fn search_films(
    State(service): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Film>>> {
    let query = SearchParams::from_pairs(pairs).into_query();
    let films = service.search_films(&query).await?;
    debug!("Retrieved {} films", films.len());
    Ok(Json(films))
}

/// GET /api/catalog/films/{id}
async fn get_film_by_id(
    State(service): State<AppState>,
    Path(id): Path<FilmId>,
) -> AppResult<Json<Film>> {
    info!("Fetching film with ID: {}", id);
    service
        .get_film_by_id(id)
        .await
        .map(Json)
        .ok_or(AppError::FilmNotFound(id))
}
