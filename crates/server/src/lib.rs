//! Server crate for the film catalog query service.
//!
//! Wires the catalog fetcher and the query engine together behind an
//! HTTP API.

pub mod catalog_service;
pub mod config;
pub mod error;
pub mod params;
pub mod routes;

pub use catalog_service::FilmCatalogService;
pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use routes::build_app_router;
