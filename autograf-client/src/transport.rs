//! HTTP transport configuration.

use crate::error::{ClientError, Result};
use std::time::Duration;

/// Settings used to build the [`Transport`] a [`Client`](crate::Client) talks through.
///
/// The default imposes no timeouts and verifies TLS certificates. Deadlines are
/// normally expressed per call with a [`RequestContext`](crate::RequestContext);
/// the timeouts here are a transport-wide ceiling.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Total time allowed for a request, including reading the body.
    pub timeout: Option<Duration>,
    /// Time allowed to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// How long idle pooled connections are kept.
    pub pool_idle_timeout: Option<Duration>,
    /// Skip TLS certificate verification (self-signed dev servers only).
    pub accept_invalid_certs: bool,
}

impl TransportConfig {
    /// Set the total request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the idle timeout for pooled connections.
    #[must_use]
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Accept invalid TLS certificates.
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build a transport from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestBuild`] if the TLS backend cannot be initialized.
    pub fn build(&self) -> Result<Transport> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.pool_idle_timeout {
            builder = builder.pool_idle_timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ClientError::RequestBuild(e.to_string()))?;

        Ok(Transport { http })
    }
}

/// The HTTP transport shared by a client and the clients derived from it.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    /// Wrap an already configured `reqwest` client (custom TLS roots, proxies).
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl From<reqwest::Client> for Transport {
    fn from(http: reqwest::Client) -> Self {
        Self::from_client(http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_timeouts() {
        let config = TransportConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert!(config.pool_idle_timeout.is_none());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_config_builder() {
        let config = TransportConfig::default()
            .with_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(5))
            .with_accept_invalid_certs(true);

        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert!(config.accept_invalid_certs);
        assert!(config.build().is_ok());
    }
}
