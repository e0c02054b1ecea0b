//! In-memory tree store with faithful coordination-service semantics.
//!
//! This is the reference implementation of [`TreeStore`]. It keeps the
//! properties the backend layers are written against: parents must exist
//! before children can be created, content is tri-state (missing node /
//! null content / bytes), versions advance on every set, and a node with
//! children refuses deletion.

use std::collections::BTreeMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::{
    parent_path, Acl, CreateMode, CreateOutcome, TreeError, TreeStore, Version,
};

#[derive(Clone, Debug)]
struct Node {
    data: Option<Bytes>,
    version: i32,
}

/// An in-process [`TreeStore`].
///
/// Paths are absolute (`/a/b/c`); the root node `/` always exists and
/// cannot be deleted. Interior mutability makes one instance shareable
/// across threads, matching how a real client connection is shared.
///
/// # Example
///
/// ```rust
/// use trellis_tree_store::{Acl, CreateMode, MemoryTreeStore, TreeError, TreeStore};
///
/// let store = MemoryTreeStore::new();
///
/// // Parents are never created implicitly.
/// let err = store
///     .create("/a/b", None, CreateMode::Persistent, Acl::OPEN)
///     .unwrap_err();
/// assert!(matches!(err, TreeError::NoNode(_)));
/// ```
pub struct MemoryTreeStore {
    nodes: Mutex<BTreeMap<String, Node>>,
}

impl MemoryTreeStore {
    /// Create an empty store containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of nodes, excluding the implicit root.
    pub fn node_count(&self) -> usize {
        self.nodes.lock().unwrap().len()
    }

    fn normalize(path: &str) -> Result<String, TreeError> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok("/".to_string());
        }
        if !trimmed.starts_with('/') {
            return Err(TreeError::NoNode(path.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn is_root(path: &str) -> bool {
        path == "/"
    }
}

impl Default for MemoryTreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore for MemoryTreeStore {
    fn exists(&self, path: &str) -> Result<bool, TreeError> {
        let path = Self::normalize(path)?;
        if Self::is_root(&path) {
            return Ok(true);
        }
        Ok(self.nodes.lock().unwrap().contains_key(&path))
    }

    fn create(
        &self,
        path: &str,
        data: Option<Bytes>,
        _mode: CreateMode,
        _acl: Acl,
    ) -> Result<CreateOutcome, TreeError> {
        let path = Self::normalize(path)?;
        if Self::is_root(&path) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let mut nodes = self.nodes.lock().unwrap();
        if nodes.contains_key(&path) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let parent = parent_path(&path).unwrap_or("/");
        if !Self::is_root(parent) && !nodes.contains_key(parent) {
            return Err(TreeError::NoNode(parent.to_string()));
        }

        nodes.insert(path, Node { data, version: 0 });
        Ok(CreateOutcome::Created)
    }

    fn set(&self, path: &str, data: Bytes, version: Version) -> Result<(), TreeError> {
        let path = Self::normalize(path)?;
        let mut nodes = self.nodes.lock().unwrap();
        let node = nodes
            .get_mut(&path)
            .ok_or_else(|| TreeError::NoNode(path.clone()))?;

        if let Version::Exact(expected) = version {
            if node.version != expected {
                return Err(TreeError::BadVersion { path, expected });
            }
        }

        node.data = Some(data);
        node.version += 1;
        Ok(())
    }

    fn get(&self, path: &str) -> Result<Option<Bytes>, TreeError> {
        let path = Self::normalize(path)?;
        if Self::is_root(&path) {
            return Ok(None);
        }
        let nodes = self.nodes.lock().unwrap();
        let node = nodes
            .get(&path)
            .ok_or_else(|| TreeError::NoNode(path.clone()))?;
        Ok(node.data.clone())
    }

    fn delete(&self, path: &str, version: Version) -> Result<(), TreeError> {
        let path = Self::normalize(path)?;
        if Self::is_root(&path) {
            return Err(TreeError::NotEmpty(path));
        }

        let mut nodes = self.nodes.lock().unwrap();
        let node = nodes
            .get(&path)
            .ok_or_else(|| TreeError::NoNode(path.clone()))?;

        if let Version::Exact(expected) = version {
            if node.version != expected {
                return Err(TreeError::BadVersion { path, expected });
            }
        }

        let child_prefix = format!("{}/", path);
        if nodes.keys().any(|k| k.starts_with(&child_prefix)) {
            return Err(TreeError::NotEmpty(path));
        }

        nodes.remove(&path);
        Ok(())
    }

    fn children(&self, path: &str) -> Result<Vec<String>, TreeError> {
        let path = Self::normalize(path)?;
        let nodes = self.nodes.lock().unwrap();
        if !Self::is_root(&path) && !nodes.contains_key(&path) {
            return Err(TreeError::NoNode(path));
        }

        let child_prefix = if Self::is_root(&path) {
            "/".to_string()
        } else {
            format!("{}/", path)
        };

        let names = nodes
            .range(child_prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&child_prefix))
            .filter_map(|(k, _)| {
                let rest = &k[child_prefix.len()..];
                if rest.is_empty() || rest.contains('/') {
                    None
                } else {
                    Some(rest.to_string())
                }
            })
            .collect();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(store: &MemoryTreeStore, path: &str) {
        store
            .create(path, None, CreateMode::Persistent, Acl::OPEN)
            .unwrap();
    }

    #[test]
    fn create_requires_parent() {
        let store = MemoryTreeStore::new();

        let err = store
            .create("/a/b", None, CreateMode::Persistent, Acl::OPEN)
            .unwrap_err();
        assert!(matches!(err, TreeError::NoNode(_)));

        make(&store, "/a");
        assert_eq!(
            store
                .create("/a/b", None, CreateMode::Persistent, Acl::OPEN)
                .unwrap(),
            CreateOutcome::Created
        );
    }

    #[test]
    fn create_existing_reports_already_exists() {
        let store = MemoryTreeStore::new();
        make(&store, "/a");
        assert_eq!(
            store
                .create("/a", None, CreateMode::Persistent, Acl::OPEN)
                .unwrap(),
            CreateOutcome::AlreadyExists
        );
    }

    #[test]
    fn root_always_exists() {
        let store = MemoryTreeStore::new();
        assert!(store.exists("/").unwrap());
        assert!(store.exists("").unwrap());
        assert_eq!(store.children("/").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn content_is_tri_state() {
        let store = MemoryTreeStore::new();

        // Missing node: error.
        assert!(matches!(store.get("/a"), Err(TreeError::NoNode(_))));

        // Node without content: Ok(None).
        make(&store, "/a");
        assert_eq!(store.get("/a").unwrap(), None);

        // Zero-length content is still content.
        store.set("/a", Bytes::new(), Version::Any).unwrap();
        assert_eq!(store.get("/a").unwrap(), Some(Bytes::new()));
    }

    #[test]
    fn set_missing_node_fails() {
        let store = MemoryTreeStore::new();
        let err = store
            .set("/ghost", Bytes::from_static(b"x"), Version::Any)
            .unwrap_err();
        assert!(matches!(err, TreeError::NoNode(_)));
    }

    #[test]
    fn versions_advance_on_set() {
        let store = MemoryTreeStore::new();
        make(&store, "/v");

        store
            .set("/v", Bytes::from_static(b"1"), Version::Exact(0))
            .unwrap();
        // The version moved past 0, so a stale expectation fails.
        let err = store
            .set("/v", Bytes::from_static(b"2"), Version::Exact(0))
            .unwrap_err();
        assert!(matches!(err, TreeError::BadVersion { .. }));

        // Version::Any always applies.
        store
            .set("/v", Bytes::from_static(b"3"), Version::Any)
            .unwrap();
        assert_eq!(store.get("/v").unwrap(), Some(Bytes::from_static(b"3")));
    }

    #[test]
    fn delete_refuses_non_empty() {
        let store = MemoryTreeStore::new();
        make(&store, "/a");
        make(&store, "/a/b");
        assert_eq!(store.node_count(), 2);

        let err = store.delete("/a", Version::Any).unwrap_err();
        assert!(matches!(err, TreeError::NotEmpty(_)));

        store.delete("/a/b", Version::Any).unwrap();
        store.delete("/a", Version::Any).unwrap();
        assert!(!store.exists("/a").unwrap());
    }

    #[test]
    fn delete_missing_node_fails() {
        let store = MemoryTreeStore::new();
        let err = store.delete("/ghost", Version::Any).unwrap_err();
        assert!(matches!(err, TreeError::NoNode(_)));
    }

    #[test]
    fn children_are_immediate_only() {
        let store = MemoryTreeStore::new();
        make(&store, "/a");
        make(&store, "/a/b");
        make(&store, "/a/c");
        make(&store, "/a/b/deep");

        let mut names = store.children("/a").unwrap();
        names.sort();
        assert_eq!(names, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn children_of_missing_node_fails() {
        let store = MemoryTreeStore::new();
        assert!(matches!(
            store.children("/ghost"),
            Err(TreeError::NoNode(_))
        ));
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let store = Arc::new(MemoryTreeStore::new());
        make(&store, "/t");

        std::thread::scope(|s| {
            for name in ["/t/one", "/t/two"] {
                let store = Arc::clone(&store);
                s.spawn(move || {
                    store
                        .create(name, None, CreateMode::Persistent, Acl::OPEN)
                        .unwrap();
                });
            }
        });

        assert_eq!(store.children("/t").unwrap().len(), 2);
    }
}
