//! Query-string parameters for the search endpoint.
//!
//! Every parameter is taken as raw text and parsed leniently: a value that
//! does not parse is logged and ignored, the same as if it were absent.
//! `genreIds` and `genreNames` may be repeated, comma-separated, or both.

use catalog_model::GenreId;
use pipeline::{split_genre_names, FilmQuery, SortBy, SortDirection};
use tracing::{debug, warn};

/// `GET /api/catalog/films` parameters, as sent by clients.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub title: Option<String>,
    /// Raw `genreIds` values, one per occurrence
    pub genre_ids: Vec<String>,
    /// Raw `genreNames` values, one per occurrence
    pub genre_names: Vec<String>,
    pub release_year: Option<String>,
    pub min_rating: Option<String>,
    pub original_language: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl SearchParams {
    /// Collect decoded query-string pairs.
    ///
    /// For single-valued parameters the first occurrence wins. Unknown keys
    /// are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "genreIds" => {
                    params.genre_ids.push(value);
                    continue;
                }
                "genreNames" => {
                    params.genre_names.push(value);
                    continue;
                }
                "title" => &mut params.title,
                "releaseYear" => &mut params.release_year,
                "minRating" => &mut params.min_rating,
                "originalLanguage" => &mut params.original_language,
                "sortBy" => &mut params.sort_by,
                "sortDirection" => &mut params.sort_direction,
                _ => {
                    debug!("Ignoring unknown query parameter '{}'", key);
                    continue;
                }
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Turn raw parameters into a query.
    ///
    /// Missing `sortBy` / `sortDirection` default to `releaseYear` / `desc`.
    pub fn into_query(self) -> FilmQuery {
        let mut query = FilmQuery::new();

        if let Some(title) = self.title {
            query = query.with_title(title);
        }
        if !self.genre_ids.is_empty() {
            let ids = self.genre_ids.iter().flat_map(|raw| parse_genre_ids(raw));
            query = query.with_genre_ids(ids);
        }
        if !self.genre_names.is_empty() {
            let names = self.genre_names.iter().flat_map(|raw| split_genre_names(raw));
            query = query.with_genre_names(names);
        }
        if let Some(year) = self
            .release_year
            .as_deref()
            .and_then(|raw| parse_lenient::<i32>("releaseYear", raw))
        {
            query = query.with_release_year(year);
        }
        if let Some(min_rating) = self
            .min_rating
            .as_deref()
            .and_then(|raw| parse_lenient::<f64>("minRating", raw))
            .filter(|value| value.is_finite())
        {
            query = query.with_min_rating(min_rating);
        }
        if let Some(language) = self.original_language {
            query = query.with_original_language(language);
        }

        let sort_by = self
            .sort_by
            .as_deref()
            .map(SortBy::parse)
            .unwrap_or(SortBy::ReleaseYear);
        let sort_direction = self
            .sort_direction
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or(SortDirection::Descending);

        query.sorted_by(sort_by, sort_direction)
    }
}

fn parse_lenient<T: std::str::FromStr>(field: &str, raw: &str) -> Option<T> {
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring malformed {} parameter: '{}'", field, raw);
            None
        }
    }
}

fn parse_genre_ids(raw: &str) -> Vec<GenreId> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| parse_lenient::<GenreId>("genreIds", token))
        .collect()
}
