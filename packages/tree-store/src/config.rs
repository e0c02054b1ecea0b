//! Connection settings for tree-store clients.

use std::time::Duration;

/// How a client should reach the coordination service.
///
/// Trellis itself never dials; whoever constructs the concrete client
/// consumes this. A failed initial connection is a fatal construction
/// error ([`crate::TreeError::ConnectionFailed`]), never retried here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service endpoints, in connection-attempt order.
    pub endpoints: Vec<String>,
    /// Timeout for establishing the initial connection.
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Default initial-connection timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Parse a comma-separated endpoint list, e.g. `"zk1:2181,zk2:2181"`.
    ///
    /// Whitespace around entries is trimmed and empty entries are dropped.
    pub fn from_address(address: &str) -> Self {
        let endpoints = address
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            endpoints,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Replace the initial-connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_separated_endpoints() {
        let config = ClientConfig::from_address("zk1:2181,zk2:2181,zk3:2181");
        assert_eq!(config.endpoints, vec!["zk1:2181", "zk2:2181", "zk3:2181"]);
        assert_eq!(config.connect_timeout, ClientConfig::DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn trims_and_drops_empty_entries() {
        let config = ClientConfig::from_address(" zk1:2181 ,, zk2:2181 ");
        assert_eq!(config.endpoints, vec!["zk1:2181", "zk2:2181"]);
    }

    #[test]
    fn empty_address_yields_no_endpoints() {
        let config = ClientConfig::from_address("");
        assert!(config.endpoints.is_empty());
    }

    #[test]
    fn timeout_override() {
        let config =
            ClientConfig::from_address("zk1:2181").with_connect_timeout(Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
