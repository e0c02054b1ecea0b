//! Configuration surface for the znode backend.

use std::collections::HashMap;

use trellis_tree_store::ClientConfig;

/// Root namespace used when the configuration does not name one.
pub const DEFAULT_ROOT: &str = "vault/";

/// Parsed backend configuration.
///
/// Recognized keys:
///
/// * `"path"` - root namespace inside the tree (default [`DEFAULT_ROOT`]).
/// * `"address"` - comma-separated service endpoints, handed to whoever
///   constructs the concrete client.
///
/// Unrecognized keys are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZnodeConfig {
    /// Root path, normalized to exactly one leading and one trailing `/`.
    pub root: String,
    /// Connection settings for the tree-store client.
    pub client: ClientConfig,
}

impl ZnodeConfig {
    /// Build a configuration from a string map.
    pub fn from_map(conf: &HashMap<String, String>) -> Self {
        let root = conf.get("path").map(String::as_str).unwrap_or(DEFAULT_ROOT);
        let address = conf.get("address").map(String::as_str).unwrap_or("");
        Self {
            root: normalize_root(root),
            client: ClientConfig::from_address(address),
        }
    }

    /// Build a configuration from a root path alone.
    pub fn with_root(root: &str) -> Self {
        Self {
            root: normalize_root(root),
            client: ClientConfig::from_address(""),
        }
    }
}

impl Default for ZnodeConfig {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

/// Normalize a root path to exactly one leading and one trailing separator,
/// so `"foo"`, `"/foo"`, `"foo/"`, and `"/foo/"` all address the same
/// namespace.
fn normalize_root(root: &str) -> String {
    let trimmed = root.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_applies() {
        let config = ZnodeConfig::from_map(&HashMap::new());
        assert_eq!(config.root, "/vault/");
        assert!(config.client.endpoints.is_empty());
    }

    #[test]
    fn root_separators_normalize() {
        for root in ["foo", "/foo", "foo/", "/foo/", "//foo//"] {
            assert_eq!(ZnodeConfig::with_root(root).root, "/foo/", "input {:?}", root);
        }
    }

    #[test]
    fn nested_root_keeps_interior_separators() {
        assert_eq!(ZnodeConfig::with_root("a/b/c").root, "/a/b/c/");
    }

    #[test]
    fn empty_root_is_tree_root() {
        assert_eq!(ZnodeConfig::with_root("").root, "/");
        assert_eq!(ZnodeConfig::with_root("/").root, "/");
    }

    #[test]
    fn address_splits_into_endpoints() {
        let conf = HashMap::from([
            ("path".to_string(), "ns".to_string()),
            ("address".to_string(), "zk1:2181,zk2:2181".to_string()),
        ]);
        let config = ZnodeConfig::from_map(&conf);
        assert_eq!(config.root, "/ns/");
        assert_eq!(config.client.endpoints, vec!["zk1:2181", "zk2:2181"]);
    }

    #[test]
    fn unrecognized_keys_ignored() {
        let conf = HashMap::from([("frobnicate".to_string(), "yes".to_string())]);
        let config = ZnodeConfig::from_map(&conf);
        assert_eq!(config.root, "/vault/");
    }
}
