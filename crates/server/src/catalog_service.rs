//! # Film Catalog Service
//!
//! Coordinates one request end to end:
//! 1. Fetch a fresh catalog snapshot from the upstream
//! 2. Run the query engine over it (filter, then sort)
//! 3. Hand the ordered films back to the transport layer
//!
//! Nothing is shared between requests except the provider handle, so
//! concurrent searches need no locking.

use std::time::Instant;

use catalog_model::{Film, FilmId};
use pipeline::{FilmQuery, QueryEngine};
use sources::{CatalogFetcher, FetchError};
use tracing::{debug, info, warn};

/// Search and lookup over the upstream catalog.
#[derive(Clone)]
pub struct FilmCatalogService {
    fetcher: CatalogFetcher,
    engine: QueryEngine,
}

impl FilmCatalogService {
    pub fn new(fetcher: CatalogFetcher) -> Self {
        Self {
            fetcher,
            engine: QueryEngine::new(),
        }
    }

    /// Fetch the catalog and return the films matching `query`, in order.
    ///
    /// A failed catalog fetch is returned to the caller, never replaced
    /// by an empty result.
    pub async fn search_films(&self, query: &FilmQuery) -> Result<Vec<Film>, FetchError> {
        let start_time = Instant::now();
        info!(
            title = ?query.title,
            genre_ids = ?query.genre_ids,
            genre_names = ?query.genre_names,
            release_year = ?query.release_year,
            min_rating = ?query.min_rating,
            language = ?query.original_language,
            sort_by = %query.sort_by,
            sort_direction = %query.sort_direction,
            "Searching films"
        );

        let films = self.fetcher.fetch().await?;
        let fetched = films.len();

        let results = self.engine.search(films, query);
        debug!(
            "Returning {} of {} films after filtering and sorting ({:.2?})",
            results.len(),
            fetched,
            start_time.elapsed()
        );
        Ok(results)
    }

    /// Look up a single film. Upstream failures are reported as absence.
    pub async fn get_film_by_id(&self, id: FilmId) -> Option<Film> {
        match self.fetcher.fetch_by_id(id).await {
            Some(film) => {
                debug!("Found film: {}", film.title);
                Some(film)
            }
            None => {
                warn!("Film with ID {} not found", id);
                None
            }
        }
    }

    /// Look up a single film, keeping upstream failures visible.
    pub async fn try_get_film_by_id(&self, id: FilmId) -> Result<Option<Film>, FetchError> {
        self.fetcher.try_fetch_by_id(id).await
    }
}
