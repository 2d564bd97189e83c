//! The query value object and its sort tokens.

use std::fmt;

use catalog_model::GenreId;
use tracing::debug;

// =============================================================================
// Sort tokens
// =============================================================================

/// Which key to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    ReleaseYear,
    Rating,
    Popularity,
}

impl SortBy {
    /// Parse a caller-supplied token, case-insensitively.
    ///
    /// Never fails: anything unrecognized sorts by release year.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "rating" => SortBy::Rating,
            "popularity" => SortBy::Popularity,
            "releaseyear" => SortBy::ReleaseYear,
            other => {
                debug!("Unknown sortBy '{}', falling back to releaseYear", other);
                SortBy::ReleaseYear
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::ReleaseYear => "releaseYear",
            SortBy::Rating => "rating",
            SortBy::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only `desc` (any case) means descending; every other token,
    /// including `descending`, is ascending.
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FilmQuery
// =============================================================================

/// Everything a caller can ask of the catalog.
///
/// All filters are optional and combine with AND. Build one with
/// [`FilmQuery::new`] and the `with_*` methods:
///
/// ```
/// use pipeline::{FilmQuery, SortBy, SortDirection};
///
/// let query = FilmQuery::new()
///     .with_title("star")
///     .with_min_rating(7.0)
///     .sorted_by(SortBy::Rating, SortDirection::Descending);
///
/// assert!(query.has_filters());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilmQuery {
    pub title: Option<String>,
    pub genre_ids: Vec<GenreId>,
    pub genre_names: Vec<String>,
    pub release_year: Option<i32>,
    pub min_rating: Option<f64>,
    pub original_language: Option<String>,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

impl FilmQuery {
    /// No filters, newest releases first.
    pub fn new() -> Self {
        Self {
            title: None,
            genre_ids: Vec::new(),
            genre_names: Vec::new(),
            release_year: None,
            min_rating: None,
            original_language: None,
            sort_by: SortBy::ReleaseYear,
            sort_direction: SortDirection::Descending,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_genre_ids(mut self, ids: impl IntoIterator<Item = GenreId>) -> Self {
        self.genre_ids = ids.into_iter().collect();
        self
    }

    pub fn with_genre_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.genre_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = Some(language.into());
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_direction = direction;
        self
    }

    /// Whether any filter is set. Sorting alone does not count.
    pub fn has_filters(&self) -> bool {
        self.title.is_some()
            || !self.genre_ids.is_empty()
            || !self.genre_names.is_empty()
            || self.release_year.is_some()
            || self.min_rating.is_some()
            || self.original_language.is_some()
    }
}

impl Default for FilmQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated genre list such as `"Action, Drama"`.
///
/// Tokens are trimmed and empty tokens dropped, so `"Action,,"` yields
/// just `["Action"]`.
pub fn split_genre_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_parse() {
        assert_eq!(SortBy::parse("rating"), SortBy::Rating);
        assert_eq!(SortBy::parse("RATING"), SortBy::Rating);
        assert_eq!(SortBy::parse("Popularity"), SortBy::Popularity);
        assert_eq!(SortBy::parse("releaseYear"), SortBy::ReleaseYear);
        assert_eq!(SortBy::parse("director"), SortBy::ReleaseYear);
        assert_eq!(SortBy::parse(""), SortBy::ReleaseYear);
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("descending"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Ascending);
    }

    #[test]
    fn test_split_genre_names() {
        assert_eq!(split_genre_names("Action, Drama"), vec!["Action", "Drama"]);
        assert_eq!(split_genre_names("Action,Drama"), vec!["Action", "Drama"]);
        assert_eq!(split_genre_names("Sci-Fi"), vec!["Sci-Fi"]);
        assert_eq!(split_genre_names("Action,, "), vec!["Action"]);
        assert!(split_genre_names("").is_empty());
    }

    #[test]
    fn test_new_query_has_no_filters() {
        let query = FilmQuery::new();
        assert!(!query.has_filters());
        assert_eq!(query.sort_by, SortBy::ReleaseYear);
        assert_eq!(query.sort_direction, SortDirection::Descending);

        let sorted_only = query.sorted_by(SortBy::Rating, SortDirection::Ascending);
        assert!(!sorted_only.has_filters());
    }

    #[test]
    fn test_builder_sets_filters() {
        let query = FilmQuery::new()
            .with_genre_ids([1, 2])
            .with_genre_names(["Drama"])
            .with_release_year(1994);

        assert!(query.has_filters());
        assert_eq!(query.genre_ids, vec![1, 2]);
        assert_eq!(query.genre_names, vec!["Drama".to_string()]);
        assert_eq!(query.release_year, Some(1994));
    }
}
