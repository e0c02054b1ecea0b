//! The Backend trait: four operations over a flat key namespace.

use std::sync::Arc;

use crate::{Entry, Error};

/// A flat key/value storage backend.
///
/// Receivers are `&self`: a backend is stateless beyond its immutable
/// configuration and its shared substrate handle, and concurrent callers
/// issue operations in parallel without coordination from this layer.
/// All calls block until the substrate answers; there is no timeout,
/// retry, or cancellation contract here.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Backend>` or
/// `Arc<dyn Backend>`.
pub trait Backend: Send + Sync {
    /// Insert or update an entry. Unconditional: the last writer wins.
    fn put(&self, entry: &Entry) -> Result<(), Error>;

    /// Fetch an entry.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - the key has never been assigned a value. Not an
    ///   error condition.
    /// * `Ok(Some(entry))` - the stored entry; a zero-length value is
    ///   present, not absent.
    fn get(&self, key: &str) -> Result<Option<Entry>, Error>;

    /// Permanently delete an entry.
    ///
    /// Deleting a key that does not exist is a successful no-op.
    fn delete(&self, key: &str) -> Result<(), Error>;

    /// List the immediate child names under a prefix, sorted
    /// lexicographically.
    ///
    /// Names that themselves contain entries beneath them additionally
    /// appear with a trailing `/` marker, distinguishing "directories"
    /// from leaves.
    fn list(&self, prefix: &str) -> Result<Vec<String>, Error>;
}

// Blanket implementations for references, boxes, and arcs

impl<T: Backend + ?Sized> Backend for &T {
    fn put(&self, entry: &Entry) -> Result<(), Error> {
        (**self).put(entry)
    }

    fn get(&self, key: &str) -> Result<Option<Entry>, Error> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        (**self).delete(key)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        (**self).list(prefix)
    }
}

impl<T: Backend + ?Sized> Backend for Box<T> {
    fn put(&self, entry: &Entry) -> Result<(), Error> {
        self.as_ref().put(entry)
    }

    fn get(&self, key: &str) -> Result<Option<Entry>, Error> {
        self.as_ref().get(key)
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        self.as_ref().delete(key)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        self.as_ref().list(prefix)
    }
}

impl<T: Backend + ?Sized> Backend for Arc<T> {
    fn put(&self, entry: &Entry) -> Result<(), Error> {
        self.as_ref().put(entry)
    }

    fn get(&self, key: &str) -> Result<Option<Entry>, Error> {
        self.as_ref().get(key)
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        self.as_ref().delete(key)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        self.as_ref().list(prefix)
    }
}
