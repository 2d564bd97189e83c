//! Catalog Fetcher - produces the candidate set for a query.
//!
//! Wraps a [`FilmProvider`] and applies the fetch policy:
//! - an absent catalog is an empty catalog, never a failure
//! - a failed catalog fetch propagates to the caller
//! - a single-film lookup either keeps the distinction between "missing"
//!   and "failed" ([`CatalogFetcher::try_fetch_by_id`]) or collapses both
//!   into `None` ([`CatalogFetcher::fetch_by_id`])

use std::sync::Arc;

use catalog_model::{Film, FilmId};
use tracing::{debug, error, info, instrument};

use crate::error::Result;
use crate::provider::FilmProvider;

/// Fetches fresh catalog snapshots from a shared provider.
///
/// Cheap to clone; every clone talks to the same provider. Nothing is
/// cached between calls.
#[derive(Clone)]
pub struct CatalogFetcher {
    provider: Arc<dyn FilmProvider>,
}

impl CatalogFetcher {
    pub fn new(provider: Arc<dyn FilmProvider>) -> Self {
        Self { provider }
    }

    /// Convenience constructor taking ownership of the provider.
    pub fn from_provider(provider: impl FilmProvider + 'static) -> Self {
        Self::new(Arc::new(provider))
    }

    /// Fetch the complete catalog.
    ///
    /// An absent payload yields an empty vector. Upstream failures are
    /// returned as-is.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn fetch(&self) -> Result<Vec<Film>> {
        info!("Fetching full catalog");
        let films = match self.provider.fetch_all().await? {
            Some(films) => films,
            None => {
                debug!("Upstream returned no catalog, using an empty one");
                Vec::new()
            }
        };
        debug!("Fetched {} films", films.len());
        Ok(films)
    }

    /// Fetch one film, keeping "not found" (`Ok(None)`) apart from
    /// upstream failure (`Err`).
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn try_fetch_by_id(&self, id: FilmId) -> Result<Option<Film>> {
        info!("Fetching film {}", id);
        self.provider.fetch_one(id).await
    }

    /// Fetch one film, treating any failure as absence.
    ///
    /// The failure is logged, then dropped. Use
    /// [`try_fetch_by_id`](Self::try_fetch_by_id) to see it.
    pub async fn fetch_by_id(&self, id: FilmId) -> Option<Film> {
        match self.try_fetch_by_id(id).await {
            Ok(film) => film,
            Err(e) => {
                error!("Failed to retrieve film with ID {}: {}", id, e);
                None
            }
        }
    }
}
