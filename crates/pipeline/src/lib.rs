//! Pipeline for filtering and sorting film catalogs.
//!
//! This crate provides:
//! - FilmQuery, the immutable description of what a caller wants
//! - FilmFilter trait and implementations for each optional filter
//! - FilterPipeline for composing filters (logical AND)
//! - Sorting by release year, rating, or derived popularity
//! - QueryEngine, which runs the whole thing
//!
//! ## Architecture
//! A query runs in stages over a freshly fetched snapshot:
//! 1. Filters remove films that fail any supplied predicate
//! 2. Sort keys are computed once per surviving film
//! 3. Films are stably sorted by key and direction
//!
//! ## Example Usage
//! ```
//! use catalog_model::Film;
//! use pipeline::{FilmQuery, QueryEngine, SortBy, SortDirection};
//!
//! let films = vec![
//!     Film::new(1, "Memento", 2000).with_rating(8.4),
//!     Film::new(2, "Inception", 2010).with_rating(8.8),
//! ];
//!
//! let query = FilmQuery::new().sorted_by(SortBy::Rating, SortDirection::Descending);
//! let result = QueryEngine::new().search(films, &query);
//!
//! assert_eq!(result[0].title, "Inception");
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod sorting;
pub mod traits;

// Re-export main types
pub use engine::{search, QueryEngine};
pub use filter_pipeline::FilterPipeline;
pub use query::{split_genre_names, FilmQuery, SortBy, SortDirection};
pub use sorting::{sort_films, sort_key};
pub use traits::FilmFilter;
