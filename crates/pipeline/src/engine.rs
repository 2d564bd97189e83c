//! # Query Engine
//!
//! Runs a [`FilmQuery`] against a catalog snapshot:
//! 1. Build the filter pipeline for the filters the query sets
//! 2. Filter (conjunction of every supplied predicate)
//! 3. Sort the survivors by the query's single key and direction
//!
//! The engine holds no state. The same query on the same snapshot always
//! produces the same ordered output.

use catalog_model::Film;
use tracing::debug;

use crate::filter_pipeline::FilterPipeline;
use crate::query::FilmQuery;
use crate::sorting::sort_films;

/// Stateless search over in-memory films.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Filter and sort `films` according to `query`.
    pub fn search(&self, films: Vec<Film>, query: &FilmQuery) -> Vec<Film> {
        let input_count = films.len();

        let pipeline = FilterPipeline::from_query(query);
        let filtered = pipeline.apply(films);
        debug!(
            "Filtered {} films down to {} with {} filters",
            input_count,
            filtered.len(),
            pipeline.len()
        );

        let sorted = sort_films(filtered, query.sort_by, query.sort_direction);
        debug!(
            "Sorted {} films by {} {}",
            sorted.len(),
            query.sort_by,
            query.sort_direction
        );
        sorted
    }
}

/// Shorthand for `QueryEngine::new().search(films, query)`.
pub fn search(films: Vec<Film>, query: &FilmQuery) -> Vec<Film> {
    QueryEngine::new().search(films, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortBy, SortDirection};

    #[test]
    fn test_no_filters_keeps_every_film() {
        let films = vec![
            Film::new(1, "A", 2001),
            Film::new(2, "B", 1999),
            Film::new(3, "C", 2010),
        ];

        let query = FilmQuery::new().sorted_by(SortBy::ReleaseYear, SortDirection::Ascending);
        let result = search(films, &query);

        let ids: Vec<_> = result.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_filter_then_sort() {
        let films = vec![
            Film::new(1, "Good", 2001).with_rating(8.5),
            Film::new(2, "Great", 1999).with_rating(9.2),
            Film::new(3, "Poor", 2005).with_rating(4.0),
            Film::new(4, "Unrated", 2003),
        ];

        let query = FilmQuery::new()
            .with_min_rating(8.0)
            .sorted_by(SortBy::Rating, SortDirection::Descending);
        let result = QueryEngine::new().search(films, &query);

        let ids: Vec<_> = result.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_empty_catalog() {
        let query = FilmQuery::new().with_title("anything");
        assert!(search(Vec::new(), &query).is_empty());
    }
}
