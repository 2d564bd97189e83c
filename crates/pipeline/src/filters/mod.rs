//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filters that can be composed
//! into a FilterPipeline. Each one covers a single optional field of
//! [`FilmQuery`](crate::FilmQuery).

pub mod genre;
pub mod language;
pub mod minimum_rating;
pub mod release_year;
pub mod title;

// Re-export for convenience
pub use genre::{GenreIdFilter, GenreNameFilter};
pub use language::LanguageFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use release_year::ReleaseYearFilter;
pub use title::TitleFilter;
