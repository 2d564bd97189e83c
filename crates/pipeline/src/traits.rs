//! Core traits for the filtering pipeline.
//!
//! This module defines the FilmFilter trait that allows composable,
//! extensible predicates to be applied to a catalog snapshot.

use catalog_model::Film;

/// A single predicate over films.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Filters take ownership of the Vec<Film> and return the survivors in
///   their original order, so no film is cloned while filtering
/// - Filters never fail: a predicate that cannot be evaluated rejects
pub trait FilmFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `film` passes this filter.
    fn matches(&self, film: &Film) -> bool;

    /// Keep only the films that pass, preserving order.
    fn apply(&self, films: Vec<Film>) -> Vec<Film> {
        films.into_iter().filter(|film| self.matches(film)).collect()
    }
}
