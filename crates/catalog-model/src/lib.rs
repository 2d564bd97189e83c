//! # Catalog Model Crate
//!
//! Domain types for the film catalog: [`Film`], [`Genre`], [`Review`] and
//! the auxiliary metadata carried alongside them.
//!
//! ## Example Usage
//!
//! ```
//! use catalog_model::{Film, Genre, Review};
//!
//! let film = Film::new(1, "Heat", 1995)
//!     .with_rating(8.3)
//!     .with_genre(Genre::new(1, "Crime"))
//!     .with_review(Review::new(10, 2));
//!
//! assert_eq!(film.popularity(), 8.0);
//! ```

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    // Type aliases
    FilmId,
    GenreId,
    // Core types
    Film,
    FilmData,
    Genre,
    Person,
    Personnel,
    Review,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popularity_without_reviews_is_zero() {
        let film = Film::new(1, "Empty", 2000);
        assert_eq!(film.popularity(), 0.0);
    }

    #[test]
    fn test_popularity_sums_net_likes() {
        let film = Film::new(1, "Mixed", 2000)
            .with_review(Review::new(10, 2))
            .with_review(Review::new(1, 5));

        assert_eq!(film.popularity(), 4.0);
    }

    #[test]
    fn test_popularity_can_be_negative() {
        let film = Film::new(1, "Disliked", 2000).with_review(Review::new(0, 3));
        assert_eq!(film.popularity(), -3.0);
    }

    #[test]
    fn test_deserialize_upstream_payload() {
        let json = r#"{
            "id": 7,
            "title": "Spirited Away",
            "releaseYear": 2001,
            "originalLanguage": "ja",
            "duration": 125,
            "rating": 8.6,
            "filmData": {"id": 7, "rating": 8.6, "budget": 19000000.0, "poster": null, "trailer": null, "revenue": 395000000.0},
            "reviews": [{"id": 1, "content": "Wonderful", "numberOfLikes": 12, "numberOfDislikes": 1}],
            "genres": [{"id": 3, "name": "Animation"}],
            "personnel": [{"id": 1, "role": "Director", "person": {"id": 4, "name": "Hayao Miyazaki"}}],
            "unknownField": true
        }"#;

        let film: Film = serde_json::from_str(json).unwrap();

        assert_eq!(film.id, 7);
        assert_eq!(film.release_year, 2001);
        assert_eq!(film.original_language.as_deref(), Some("ja"));
        assert_eq!(film.rating, Some(8.6));
        assert_eq!(film.genres, vec![Genre::new(3, "Animation")]);
        assert_eq!(film.reviews[0].number_of_likes, 12);
        assert_eq!(film.popularity(), 11.0);
        assert_eq!(
            film.personnel[0].person.as_ref().and_then(|p| p.name.as_deref()),
            Some("Hayao Miyazaki")
        );
    }

    #[test]
    fn test_deserialize_nulls_as_empty() {
        let json = r#"{
            "id": 1,
            "title": null,
            "releaseYear": 1999,
            "rating": null,
            "reviews": null,
            "genres": null,
            "personnel": null
        }"#;

        let film: Film = serde_json::from_str(json).unwrap();

        assert_eq!(film.title, "");
        assert!(film.rating.is_none());
        assert!(film.reviews.is_empty());
        assert!(film.genres.is_empty());
        assert!(film.personnel.is_empty());
    }

    #[test]
    fn test_deserialize_null_scalars_as_zero() {
        let json = r#"{
            "id": 3,
            "title": "Metropolis",
            "releaseYear": null,
            "filmData": { "rating": null, "budget": null, "revenue": null },
            "reviews": [
                { "numberOfLikes": null, "numberOfDislikes": 4 },
                { "numberOfLikes": 10, "numberOfDislikes": null }
            ]
        }"#;

        let film: Film = serde_json::from_str(json).unwrap();

        assert_eq!(film.release_year, 0);
        let film_data = film.film_data.as_ref().unwrap();
        assert_eq!(film_data.rating, 0.0);
        assert_eq!(film_data.budget, 0.0);
        assert_eq!(film_data.revenue, 0.0);
        assert_eq!(film.reviews[0].number_of_likes, 0);
        assert_eq!(film.reviews[1].number_of_dislikes, 0);
        assert_eq!(film.popularity(), 6.0);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let film = Film::new(2, "Amelie", 2001).with_language("fr");
        let value = serde_json::to_value(&film).unwrap();

        assert_eq!(value["releaseYear"], 2001);
        assert_eq!(value["originalLanguage"], "fr");
        assert!(value.get("release_year").is_none());
    }
}
