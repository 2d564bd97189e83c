//! Case-insensitive title search.

use crate::traits::FilmFilter;
use catalog_model::Film;

/// Keeps films whose title contains the needle, ignoring case.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl FilmFilter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.title.to_lowercase().contains(&self.needle)
    }
}
