//! Filter to ensure a minimum rating threshold.
//!
//! Unrated films are treated as not meeting any threshold.

use crate::traits::FilmFilter;
use catalog_model::Film;

/// Removes films rated below the threshold, and every unrated film.
///
/// ## Algorithm
/// For each film:
/// 1. Reject if it has no rating
/// 2. Keep if rating >= min_rating
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive lower bound on `Film::rating`
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl FilmFilter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, film: &Film) -> bool {
        film.rating.is_some_and(|rating| rating >= self.min_rating)
    }
}
