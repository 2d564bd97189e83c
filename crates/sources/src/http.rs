//! HTTP client for the upstream film-data service.
//!
//! Speaks the upstream's REST contract:
//! - `GET {base}/films` returns a JSON array of films (or `null`)
//! - `GET {base}/films/{id}` returns a film, `null`, or 404

use std::time::Duration;

use async_trait::async_trait;
use catalog_model::{Film, FilmId};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::from_str;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::provider::FilmProvider;

/// [`FilmProvider`] backed by the upstream REST service.
///
/// No retries happen here. A timeout, when wanted, is configured on the
/// underlying [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFilmProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFilmProvider {
    /// Create a provider for the service at `base_url`
    /// (e.g. `http://localhost:8081/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a provider reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a provider whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode a possibly-null JSON body.
    ///
    /// An empty body counts as `null`. With `not_found_as_absent`, a 404 is
    /// also reported as `Ok(None)` instead of a status error.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: String,
        not_found_as_absent: bool,
    ) -> Result<Option<T>> {
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND && not_found_as_absent {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        from_str::<Option<T>>(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait]
impl FilmProvider for HttpFilmProvider {
    fn name(&self) -> &str {
        "HttpFilmProvider"
    }

    async fn fetch_all(&self) -> Result<Option<Vec<Film>>> {
        self.get_optional(format!("{}/films", self.base_url), false)
            .await
    }

    async fn fetch_one(&self, id: FilmId) -> Result<Option<Film>> {
        self.get_optional(format!("{}/films/{}", self.base_url, id), true)
            .await
    }
}
