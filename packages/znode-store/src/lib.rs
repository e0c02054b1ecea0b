//! Trellis Znode Store: Flat Keys over a Hierarchical Tree
//!
//! This crate bridges the impedance mismatch between the flat
//! [`Backend`](trellis_backend::Backend) contract and a coordination
//! service's tree of nodes, where every intermediate path segment must
//! exist before a leaf can be touched. Two algorithms carry the whole
//! adapter:
//!
//! - **Path materialization**: before any leaf operation, walk the key's
//!   segments root-to-leaf and create whatever is missing. Creation is
//!   idempotent, so concurrent writers sharing ancestors never trip over
//!   each other.
//! - **Listing reconstruction**: turn the tree's child enumeration back
//!   into a sorted flat listing, marking children that have descendants
//!   with a trailing `/`.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use trellis_backend::{Backend, Entry};
//! use trellis_tree_store::MemoryTreeStore;
//! use trellis_znode_store::{ZnodeBackend, ZnodeConfig};
//!
//! let conf = HashMap::from([("path".to_string(), "app/".to_string())]);
//! let backend = ZnodeBackend::new(ZnodeConfig::from_map(&conf), Arc::new(MemoryTreeStore::new()));
//!
//! backend.put(&Entry::new("users/alice", &b"admin"[..])).unwrap();
//! assert_eq!(backend.list("users/").unwrap(), vec!["alice".to_string()]);
//! ```

mod config;
mod store;

pub use config::{ZnodeConfig, DEFAULT_ROOT};
pub use store::ZnodeBackend;
