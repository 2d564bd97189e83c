//! Core domain types for the film catalog.
//!
//! These mirror the records served by the upstream film-data service.
//! Field names follow the upstream JSON (camelCase) so the same structs are
//! used to decode upstream payloads and to encode API responses.
//!
//! Every type here is an immutable snapshot: it is materialized for a single
//! request and dropped once the response is built.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a film within a fetched catalog
pub type FilmId = u64;

/// Unique identifier for a genre
pub type GenreId = u64;

// =============================================================================
// Film
// =============================================================================

/// A film as returned by the upstream catalog.
///
/// Only `title`, `release_year`, `original_language`, `rating`, `genres` and
/// `reviews` take part in filtering and sorting. The remaining fields are
/// carried through to the response untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: FilmId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_year: i32,
    #[serde(default)]
    pub original_language: Option<String>,
    /// Running time in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    /// `None` means the film is unrated
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub film_data: Option<FilmData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personnel: Vec<Personnel>,
}

impl Film {
    /// Create a film with the given identity and no metadata.
    ///
    /// Mostly useful for building fixtures; real films come from the
    /// upstream service.
    pub fn new(id: FilmId, title: impl Into<String>, release_year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            release_year,
            original_language: None,
            duration: None,
            rating: None,
            film_data: None,
            reviews: Vec::new(),
            genres: Vec::new(),
            personnel: Vec::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = Some(language.into());
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genres.push(genre);
        self
    }

    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }

    /// Derived popularity score: total likes minus total dislikes across
    /// every review. A film without reviews scores 0.0.
    pub fn popularity(&self) -> f64 {
        self.reviews
            .iter()
            .map(|review| review.net_likes() as f64)
            .sum()
    }
}

/// Auxiliary production metadata. Never used for filtering or sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmData {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: f64,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: f64,
}

// =============================================================================
// Genre
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Review
// =============================================================================

/// A single review attached to a film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_likes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_dislikes: u32,
}

impl Review {
    pub fn new(number_of_likes: u32, number_of_dislikes: u32) -> Self {
        Self {
            id: None,
            content: None,
            number_of_likes,
            number_of_dislikes,
        }
    }

    /// Likes minus dislikes. May be negative.
    pub fn net_likes(&self) -> i64 {
        i64::from(self.number_of_likes) - i64::from(self.number_of_dislikes)
    }
}

// =============================================================================
// Personnel
// =============================================================================

/// Someone credited on a film, with their role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub photograph: Option<String>,
}

/// Treat an explicit JSON `null` the same as a missing field.
///
/// `#[serde(default)]` only covers the missing case; the upstream service
/// sends `null` for empty collections and unset numbers.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
