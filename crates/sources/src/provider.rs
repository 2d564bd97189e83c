//! The seam between the catalog fetcher and wherever films actually live.

use async_trait::async_trait;
use catalog_model::{Film, FilmId};

use crate::error::Result;

/// A source of film records.
///
/// Implementations only translate the upstream's answers; they do not
/// decide policy. An absent payload is `Ok(None)`, and it is up to
/// [`CatalogFetcher`](crate::CatalogFetcher) to turn that into an empty
/// catalog or a missing film.
///
/// `Send + Sync` so a single provider can be shared by concurrent requests.
#[async_trait]
pub trait FilmProvider: Send + Sync {
    /// Returns the name of this provider (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the complete catalog.
    async fn fetch_all(&self) -> Result<Option<Vec<Film>>>;

    /// Fetch a single film by id.
    async fn fetch_one(&self, id: FilmId) -> Result<Option<Film>>;
}

/// Serves a fixed, in-memory snapshot.
///
/// Every call hands out a fresh clone, so callers can never observe each
/// other's transformations.
#[derive(Debug, Clone, Default)]
pub struct StaticFilmProvider {
    films: Vec<Film>,
}

impl StaticFilmProvider {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }
}

#[async_trait]
impl FilmProvider for StaticFilmProvider {
    fn name(&self) -> &str {
        "StaticFilmProvider"
    }

    async fn fetch_all(&self) -> Result<Option<Vec<Film>>> {
        Ok(Some(self.films.clone()))
    }

    async fn fetch_one(&self, id: FilmId) -> Result<Option<Film>> {
        Ok(self.films.iter().find(|film| film.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_serves_snapshot() {
        let provider = StaticFilmProvider::new(vec![
            Film::new(1, "Alien", 1979),
            Film::new(2, "Aliens", 1986),
        ]);

        let films = provider.fetch_all().await.unwrap().unwrap();
        assert_eq!(films.len(), 2);

        let film = provider.fetch_one(2).await.unwrap();
        assert_eq!(film.map(|f| f.title), Some("Aliens".to_string()));

        assert!(provider.fetch_one(99).await.unwrap().is_none());
    }
}
