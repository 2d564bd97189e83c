//! Genre selectors, by id or by name.
//!
//! A film matches when ANY of its genres is selected. An empty selector
//! behaves as if no genre filter was given.

use crate::traits::FilmFilter;
use catalog_model::{Film, GenreId};
use std::collections::HashSet;

/// Keeps films tagged with at least one of the given genre ids.
pub struct GenreIdFilter {
    ids: HashSet<GenreId>,
}

impl GenreIdFilter {
    pub fn new(ids: impl IntoIterator<Item = GenreId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl FilmFilter for GenreIdFilter {
    fn name(&self) -> &str {
        "GenreIdFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        self.ids.is_empty() || film.genres.iter().any(|genre| self.ids.contains(&genre.id))
    }
}

/// Keeps films tagged with at least one of the given genre names,
/// compared case-insensitively.
pub struct GenreNameFilter {
    names: HashSet<String>,
}

impl GenreNameFilter {
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl FilmFilter for GenreNameFilter {
    fn name(&self) -> &str {
        "GenreNameFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        self.names.is_empty()
            || film
                .genres
                .iter()
                .any(|genre| self.names.contains(&genre.name.to_lowercase()))
    }
}
