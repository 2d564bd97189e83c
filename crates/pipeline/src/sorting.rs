//! Sorting of filtered films by a single derived key.
//!
//! ## Algorithm (decorate-sort-undecorate)
//! 1. Compute the key of every film exactly once (in parallel with Rayon;
//!    the collected order matches the input order)
//! 2. Stable-sort the `(key, film)` pairs by key
//! 3. Strip the keys
//!
//! Descending order flips the comparator rather than reversing the
//! output, so films with equal keys keep their fetch order either way.

use std::cmp::Ordering;

use catalog_model::Film;
use rayon::prelude::*;

use crate::query::{SortBy, SortDirection};

/// The value a film is ordered by.
///
/// - `ReleaseYear`: the release year
/// - `Rating`: the rating, with unrated films counted as 0.0
/// - `Popularity`: likes minus dislikes summed over all reviews
pub fn sort_key(film: &Film, sort_by: SortBy) -> f64 {
    match sort_by {
        SortBy::ReleaseYear => f64::from(film.release_year),
        SortBy::Rating => film.rating.unwrap_or(0.0),
        SortBy::Popularity => film.popularity(),
    }
}

fn compare_keys(a: f64, b: f64, direction: SortDirection) -> Ordering {
    let natural = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match direction {
        SortDirection::Ascending => natural(a, b),
        SortDirection::Descending => natural(b, a),
    }
}

/// Order `films` by `sort_by` in the given direction. Stable.
pub fn sort_films(films: Vec<Film>, sort_by: SortBy, direction: SortDirection) -> Vec<Film> {
    let mut keyed: Vec<(f64, Film)> = films
        .into_par_iter()
        .map(|film| (sort_key(&film, sort_by), film))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(*a, *b, direction));

    keyed.into_iter().map(|(_, film)| film).collect()
}
