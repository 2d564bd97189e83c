//! # Sources Crate
//!
//! Where films come from. The query engine never talks to the network
//! itself; it is handed a snapshot produced here.
//!
//! ## Components
//!
//! - **provider**: the [`FilmProvider`] trait plus [`StaticFilmProvider`]
//!   for in-memory snapshots
//! - **http**: [`HttpFilmProvider`], the reqwest client for the upstream
//!   film-data service
//! - **fetcher**: [`CatalogFetcher`], which applies the fetch policy
//!   (absent catalog → empty, single-film failure → `None`)
//! - **error**: [`FetchError`]
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogFetcher, HttpFilmProvider};
//!
//! let fetcher = CatalogFetcher::from_provider(HttpFilmProvider::new("http://localhost:8081/api"));
//!
//! let films = fetcher.fetch().await?;
//! let film = fetcher.fetch_by_id(42).await;
//! ```

pub mod error;
pub mod fetcher;
pub mod http;
pub mod provider;

// Re-export commonly used types
pub use error::{FetchError, Result};
pub use fetcher::CatalogFetcher;
pub use http::HttpFilmProvider;
pub use provider::{FilmProvider, StaticFilmProvider};
