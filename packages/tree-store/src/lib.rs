//! Trellis Tree Store: Client Capability for Hierarchical Node Stores
//!
//! This is the narrow waist between trellis and a coordination service
//! (ZooKeeper and its relatives). Everything at this level speaks the tree's
//! native model: absolute slash-separated paths, nodes that may hold byte
//! content, and per-node version counters. No flat-key semantics live here -
//! that mapping belongs to the backend layers above.
//!
//! Use this layer for:
//! - Wrapping a real coordination-service client behind an injectable trait
//! - In-process test doubles with faithful tree semantics
//! - Anything that needs exists/create/set/get/delete/children primitives
//!
//! # Example
//!
//! ```rust
//! use trellis_tree_store::{Acl, CreateMode, MemoryTreeStore, TreeStore, Version};
//! use bytes::Bytes;
//!
//! let store = MemoryTreeStore::new();
//! store.create("/app", None, CreateMode::Persistent, Acl::OPEN).unwrap();
//! store.create("/app/leaf", None, CreateMode::Persistent, Acl::OPEN).unwrap();
//! store.set("/app/leaf", Bytes::from_static(b"hello"), Version::Any).unwrap();
//! assert_eq!(store.get("/app/leaf").unwrap(), Some(Bytes::from_static(b"hello")));
//! ```

pub use bytes::Bytes;

mod config;
mod error;
mod memory;
mod traits;

pub use config::ClientConfig;
pub use error::TreeError;
pub use memory::MemoryTreeStore;
pub use traits::{Acl, CreateMode, CreateOutcome, TreeStore, Version};

/// Return the parent path of an absolute node path.
///
/// The root (`"/"` or `""`) has no parent. A first-level node's parent is
/// the root, reported as `"/"`.
pub fn parent_path(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind('/') {
        Some(0) => Some("/"),
        Some(idx) => Some(&trimmed[..idx]),
        None => None,
    }
}
