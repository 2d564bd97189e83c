use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use catalog_model::{Film, FilmId, Genre, Review};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{build_app_router, FilmCatalogService};
use sources::{CatalogFetcher, FetchError, FilmProvider, StaticFilmProvider};
use tower::ServiceExt;

/// Provider whose every call fails, as if the upstream were down.
pub struct DownProvider;

#[async_trait]
impl FilmProvider for DownProvider {
    fn name(&self) -> &str {
        "DownProvider"
    }

    async fn fetch_all(&self) -> sources::Result<Option<Vec<Film>>> {
        Err(FetchError::Unavailable("connection refused".to_string()))
    }

    async fn fetch_one(&self, _id: FilmId) -> sources::Result<Option<Film>> {
        Err(FetchError::Unavailable("connection refused".to_string()))
    }
}

pub fn test_catalog() -> Vec<Film> {
    vec![
        Film::new(1, "Seven Samurai", 1954)
            .with_rating(8.6)
            .with_language("ja")
            .with_genre(Genre::new(1, "Action"))
            .with_genre(Genre::new(2, "Drama"))
            .with_review(Review::new(50, 1)),
        Film::new(2, "Mad Max: Fury Road", 2015)
            .with_rating(8.1)
            .with_language("en")
            .with_genre(Genre::new(1, "Action"))
            .with_review(Review::new(80, 10)),
        Film::new(3, "Ikiru", 1952)
            .with_rating(8.3)
            .with_language("ja")
            .with_genre(Genre::new(2, "Drama")),
        Film::new(4, "Unreleased Cut", 2015).with_language("en"),
    ]
}

/// Router backed by the in-memory test catalog.
pub fn build_test_app() -> Router {
    let fetcher = CatalogFetcher::from_provider(StaticFilmProvider::new(test_catalog()));
    build_app_router(FilmCatalogService::new(fetcher))
}

/// Router whose upstream is unreachable.
pub fn build_down_app() -> Router {
    build_app_router(FilmCatalogService::new(CatalogFetcher::from_provider(
        DownProvider,
    )))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn ids(json: &Value) -> Vec<u64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|film| film["id"].as_u64().unwrap())
        .collect()
}
