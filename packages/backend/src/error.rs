//! Error type for backend operations.

use trellis_tree_store::TreeError;

/// Errors surfaced by a [`crate::Backend`].
///
/// Absence is never an error at this layer: a missing entry is `Ok(None)`
/// from get and a successful no-op from delete. What remains is the
/// substrate's own failures plus construction-time configuration problems.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying tree store failed.
    #[error("tree store error: {0}")]
    Tree(#[from] TreeError),

    /// The backend could not be constructed from its configuration.
    #[error("backend configuration error: {message}")]
    Config {
        /// Human-readable reason.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_error_converts() {
        let e: Error = TreeError::NoNode("/x".to_string()).into();
        assert!(matches!(e, Error::Tree(_)));
        assert!(format!("{}", e).contains("/x"));
    }

    #[test]
    fn config_error_display() {
        let e = Error::Config {
            message: "bad address".to_string(),
        };
        assert!(format!("{}", e).contains("bad address"));
    }

    #[test]
    fn tree_error_is_source() {
        use std::error::Error as StdError;

        let e: Error = TreeError::NotEmpty("/x".to_string()).into();
        assert!(e.source().is_some());
    }
}
