//! Error types for the tree-store layer.
//!
//! Errors at this level mirror the coordination service's own failure modes.
//! Flat-key semantics ("entry absent", "delete was a no-op") belong in
//! higher layers and are never errors here.

/// Errors reported by a tree-store client.
#[derive(Debug)]
pub enum TreeError {
    /// The addressed node (or one of its ancestors) does not exist.
    NoNode(String),

    /// The node still has children, so it cannot be deleted.
    NotEmpty(String),

    /// A versioned operation did not match the node's current version.
    BadVersion {
        /// Path of the node.
        path: String,
        /// Version the caller asked for.
        expected: i32,
    },

    /// Generic I/O or transport failure.
    ///
    /// Use this for network errors, session expiry, IPC failures, etc.
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The initial connection to the service could not be established.
    ConnectionFailed {
        /// Human-readable reason.
        message: String,
    },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::NoNode(path) => write!(f, "no node at path: {}", path),
            TreeError::NotEmpty(path) => write!(f, "node not empty: {}", path),
            TreeError::BadVersion { path, expected } => {
                write!(f, "bad version for {}: expected {}", path, expected)
            }
            TreeError::Transport(e) => write!(f, "transport error: {}", e),
            TreeError::ConnectionFailed { message } => {
                write!(f, "client setup failed: {}", message)
            }
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TreeError {
    fn from(e: std::io::Error) -> Self {
        TreeError::Transport(Box::new(e))
    }
}
