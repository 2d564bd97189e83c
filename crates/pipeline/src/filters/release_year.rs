use crate::traits::FilmFilter;
use catalog_model::Film;

/// Keeps films released in exactly the given year.
pub struct ReleaseYearFilter {
    year: i32,
}

impl ReleaseYearFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl FilmFilter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.release_year == self.year
    }
}
