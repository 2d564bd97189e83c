//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern. Chaining is a logical AND:
//! a film survives only if every filter keeps it.

use crate::filters::{
    GenreIdFilter, GenreNameFilter, LanguageFilter, MinimumRatingFilter, ReleaseYearFilter,
    TitleFilter,
};
use crate::query::FilmQuery;
use crate::traits::FilmFilter;
use catalog_model::Film;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleFilter::new("alien"))
///     .add_filter(MinimumRatingFilter::new(7.5));
///
/// let filtered = pipeline.apply(films);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn FilmFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a query.
    ///
    /// Only the filters the query actually sets are added, so a query
    /// without filters yields an empty pipeline that passes everything.
    /// Empty genre selectors are skipped too.
    pub fn from_query(query: &FilmQuery) -> Self {
        let mut pipeline = Self::new();

        if let Some(title) = &query.title {
            pipeline = pipeline.add_filter(TitleFilter::new(title));
        }
        if !query.genre_ids.is_empty() {
            pipeline = pipeline.add_filter(GenreIdFilter::new(query.genre_ids.iter().copied()));
        }
        if !query.genre_names.is_empty() {
            pipeline = pipeline.add_filter(GenreNameFilter::new(&query.genre_names));
        }
        if let Some(year) = query.release_year {
            pipeline = pipeline.add_filter(ReleaseYearFilter::new(year));
        }
        if let Some(min_rating) = query.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if let Some(language) = &query.original_language {
            pipeline = pipeline.add_filter(LanguageFilter::new(language));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl FilmFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence, preserving the input order.
    pub fn apply(&self, films: Vec<Film>) -> Vec<Film> {
        let mut current = films;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Genre;

    fn create_test_films() -> Vec<Film> {
        vec![
            Film::new(1, "Star Wars", 1977)
                .with_rating(8.6)
                .with_language("en")
                .with_genre(Genre::new(1, "Sci-Fi")),
            Film::new(2, "Stalker", 1979)
                .with_rating(8.1)
                .with_language("ru")
                .with_genre(Genre::new(1, "Sci-Fi")),
            Film::new(3, "A Star Is Born", 1954)
                .with_language("en")
                .with_genre(Genre::new(2, "Drama")),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(create_test_films());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(LanguageFilter::new("ru"));

        let filtered = pipeline.apply(create_test_films());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_from_query_without_filters_is_empty() {
        assert!(FilterPipeline::from_query(&FilmQuery::new()).is_empty());

        let empty_selectors = FilmQuery::new()
            .with_genre_ids(Vec::new())
            .with_genre_names(Vec::<String>::new());
        assert!(FilterPipeline::from_query(&empty_selectors).is_empty());
    }

    #[test]
    fn test_from_query_adds_only_supplied_filters() {
        let query = FilmQuery::new().with_title("star").with_min_rating(8.0);
        let pipeline = FilterPipeline::from_query(&query);

        assert_eq!(
            pipeline.filter_names(),
            vec!["TitleFilter", "MinimumRatingFilter"]
        );
    }

    #[test]
    fn test_filters_compose_with_and() {
        let query = FilmQuery::new()
            .with_title("star")
            .with_original_language("EN")
            .with_genre_names(["sci-fi"]);

        let filtered = FilterPipeline::from_query(&query).apply(create_test_films());

        let ids: Vec<_> = filtered.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
