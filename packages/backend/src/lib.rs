//! Trellis Backend: Flat Key/Value Contract
//!
//! This layer defines what a trellis storage backend looks like from the
//! outside: a flat, byte-string keyed namespace with four operations.
//! How a backend maps that namespace onto its substrate (a hierarchical
//! tree, a disk, anything else) is the implementation crate's business.
//!
//! # Example
//!
//! ```rust
//! use trellis_backend::{Backend, Entry, Error};
//!
//! fn copy(from: &dyn Backend, to: &dyn Backend, key: &str) -> Result<(), Error> {
//!     if let Some(entry) = from.get(key)? {
//!         to.put(&entry)?;
//!     }
//!     Ok(())
//! }
//! ```

pub use bytes::Bytes;

mod entry;
mod error;
mod traits;

pub use entry::Entry;
pub use error::Error;
pub use traits::Backend;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_suite;
