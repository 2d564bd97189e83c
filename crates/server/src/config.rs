use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Base URL of the upstream film-data service.
    pub upstream_url: String,
    /// Per-request timeout for upstream calls. `None` waits indefinitely.
    pub upstream_timeout: Option<Duration>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                      |
    /// |-------------------------|------------------------------|
    /// | `HOST`                  | `0.0.0.0`                    |
    /// | `PORT`                  | `8080`                       |
    /// | `SERVICEDB_API_URL`     | `http://localhost:8081/api`  |
    /// | `UPSTREAM_TIMEOUT_SECS` | unset (no timeout)           |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("PORT must be a valid u16")?;

        let upstream_url =
            lookup("SERVICEDB_API_URL").unwrap_or_else(|| "http://localhost:8081/api".into());

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a valid u64")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            host,
            port,
            upstream_url,
            upstream_timeout,
        })
    }

    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.upstream_url, "http://localhost:8081/api");
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("SERVICEDB_API_URL", "http://servicedb:8080/api"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.upstream_url, "http://servicedb:8080/api");
        assert_eq!(config.upstream_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
