//! The tree-store client trait and its supporting vocabulary types.

use std::sync::Arc;

use bytes::Bytes;

use crate::TreeError;

/// Permission bits attached to a node at creation time.
///
/// Only the single scheme the backend layers need is modeled: a world
/// ACL carrying some subset of the standard permission bits. A full
/// scheme/id ACL system is a client concern, not a capability concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acl(u32);

impl Acl {
    /// Permission bit: read node content and children.
    pub const READ: u32 = 1 << 0;
    /// Permission bit: set node content.
    pub const WRITE: u32 = 1 << 1;
    /// Permission bit: create children.
    pub const CREATE: u32 = 1 << 2;
    /// Permission bit: delete children.
    pub const DELETE: u32 = 1 << 3;
    /// Permission bit: administer the node's ACL.
    pub const ADMIN: u32 = 1 << 4;

    /// World-readable/writable: every permission bit for every caller.
    pub const OPEN: Acl =
        Acl(Self::READ | Self::WRITE | Self::CREATE | Self::DELETE | Self::ADMIN);

    /// Build an ACL from raw permission bits.
    pub fn from_perms(perms: u32) -> Acl {
        Acl(perms)
    }

    /// The raw permission bits.
    pub fn perms(&self) -> u32 {
        self.0
    }
}

/// Lifetime class of a created node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateMode {
    /// The node survives until it is explicitly deleted.
    Persistent,
    /// The node is tied to the creating session.
    Ephemeral,
}

/// Tagged result of a create-if-absent attempt.
///
/// Concurrent writers may race to create the same node. Losing that race
/// still leaves the tree in the state the caller wanted, so it is reported
/// as a distinct success value rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// This call created the node.
    Created,
    /// The node already existed (possibly created by a concurrent writer).
    AlreadyExists,
}

/// Version expectation for a mutating call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Apply regardless of the node's current version.
    Any,
    /// Apply only if the node's current version matches.
    Exact(i32),
}

/// Client capability for a hierarchical node store.
///
/// Every path is absolute and slash-separated, and every path segment must
/// exist as a node before leaf operations on it succeed - implementations
/// do not create ancestors implicitly.
///
/// Implementations must be safe for concurrent use: the backend layers
/// share one client between parallel callers without additional locking.
///
/// # Object Safety
///
/// This trait is object-safe: the usual injected form is
/// `Arc<dyn TreeStore>`.
pub trait TreeStore: Send + Sync {
    /// Check whether a node exists at `path`.
    fn exists(&self, path: &str) -> Result<bool, TreeError>;

    /// Create the node at `path` if it is absent.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateOutcome::Created)` - this call created the node.
    /// * `Ok(CreateOutcome::AlreadyExists)` - the node was already there.
    /// * `Err(TreeError::NoNode)` - the parent node does not exist.
    /// * `Err(TreeError)` - a transport or service error occurred.
    fn create(
        &self,
        path: &str,
        data: Option<Bytes>,
        mode: CreateMode,
        acl: Acl,
    ) -> Result<CreateOutcome, TreeError>;

    /// Set the content of an existing node.
    fn set(&self, path: &str, data: Bytes, version: Version) -> Result<(), TreeError>;

    /// Read the content of an existing node.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - the node exists but has never been assigned content.
    /// * `Ok(Some(bytes))` - the node's content, which may be zero-length.
    /// * `Err(TreeError::NoNode)` - the node does not exist.
    fn get(&self, path: &str) -> Result<Option<Bytes>, TreeError>;

    /// Delete an existing node.
    ///
    /// Fails with [`TreeError::NotEmpty`] if the node still has children.
    fn delete(&self, path: &str, version: Version) -> Result<(), TreeError>;

    /// Enumerate the immediate child names of a node.
    ///
    /// Names are bare segments, not full paths, and arrive in whatever
    /// order the service reports them.
    fn children(&self, path: &str) -> Result<Vec<String>, TreeError>;
}

// Blanket implementations for references, boxes, and arcs

impl<T: TreeStore + ?Sized> TreeStore for &T {
    fn exists(&self, path: &str) -> Result<bool, TreeError> {
        (**self).exists(path)
    }

    fn create(
        &self,
        path: &str,
        data: Option<Bytes>,
        mode: CreateMode,
        acl: Acl,
    ) -> Result<CreateOutcome, TreeError> {
        (**self).create(path, data, mode, acl)
    }

    fn set(&self, path: &str, data: Bytes, version: Version) -> Result<(), TreeError> {
        (**self).set(path, data, version)
    }

    fn get(&self, path: &str) -> Result<Option<Bytes>, TreeError> {
        (**self).get(path)
    }

    fn delete(&self, path: &str, version: Version) -> Result<(), TreeError> {
        (**self).delete(path, version)
    }

    fn children(&self, path: &str) -> Result<Vec<String>, TreeError> {
        (**self).children(path)
    }
}

impl<T: TreeStore + ?Sized> TreeStore for Box<T> {
    fn exists(&self, path: &str) -> Result<bool, TreeError> {
        self.as_ref().exists(path)
    }

    fn create(
        &self,
        path: &str,
        data: Option<Bytes>,
        mode: CreateMode,
        acl: Acl,
    ) -> Result<CreateOutcome, TreeError> {
        self.as_ref().create(path, data, mode, acl)
    }

    fn set(&self, path: &str, data: Bytes, version: Version) -> Result<(), TreeError> {
        self.as_ref().set(path, data, version)
    }

    fn get(&self, path: &str) -> Result<Option<Bytes>, TreeError> {
        self.as_ref().get(path)
    }

    fn delete(&self, path: &str, version: Version) -> Result<(), TreeError> {
        self.as_ref().delete(path, version)
    }

    fn children(&self, path: &str) -> Result<Vec<String>, TreeError> {
        self.as_ref().children(path)
    }
}

impl<T: TreeStore + ?Sized> TreeStore for Arc<T> {
    fn exists(&self, path: &str) -> Result<bool, TreeError> {
        self.as_ref().exists(path)
    }

    fn create(
        &self,
        path: &str,
        data: Option<Bytes>,
        mode: CreateMode,
        acl: Acl,
    ) -> Result<CreateOutcome, TreeError> {
        self.as_ref().create(path, data, mode, acl)
    }

    fn set(&self, path: &str, data: Bytes, version: Version) -> Result<(), TreeError> {
        self.as_ref().set(path, data, version)
    }

    fn get(&self, path: &str) -> Result<Option<Bytes>, TreeError> {
        self.as_ref().get(path)
    }

    fn delete(&self, path: &str, version: Version) -> Result<(), TreeError> {
        self.as_ref().delete(path, version)
    }

    fn children(&self, path: &str) -> Result<Vec<String>, TreeError> {
        self.as_ref().children(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTreeStore;

    #[test]
    fn open_acl_carries_all_perms() {
        let perms = Acl::OPEN.perms();
        for bit in [Acl::READ, Acl::WRITE, Acl::CREATE, Acl::DELETE, Acl::ADMIN] {
            assert_ne!(perms & bit, 0);
        }
    }

    #[test]
    fn custom_acl_round_trips_perms() {
        let acl = Acl::from_perms(Acl::READ | Acl::WRITE);
        assert_eq!(acl.perms(), Acl::READ | Acl::WRITE);
        assert_ne!(acl, Acl::OPEN);
    }

    #[test]
    fn object_safety_works() {
        let store: Arc<dyn TreeStore> = Arc::new(MemoryTreeStore::new());

        store
            .create("/t", None, CreateMode::Persistent, Acl::OPEN)
            .unwrap();
        assert!(store.exists("/t").unwrap());
    }

    #[test]
    fn box_and_ref_blanket_impls_work() {
        let store = MemoryTreeStore::new();
        let by_ref: &dyn TreeStore = &store;
        by_ref
            .create("/r", None, CreateMode::Persistent, Acl::OPEN)
            .unwrap();

        let boxed: Box<dyn TreeStore> = Box::new(MemoryTreeStore::new());
        boxed
            .create("/b", None, CreateMode::Persistent, Acl::OPEN)
            .unwrap();
        assert!(boxed.exists("/b").unwrap());
    }
}
