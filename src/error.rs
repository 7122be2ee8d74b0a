//! Error types for the outline library.
//!
//! This module defines all error types that can occur while building the
//! outline tree or emitting the bookmark object graph.

/// Result type alias for outline library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An outline item referenced a parent id that was never added.
    ///
    /// Silently dropping the item would corrupt the sibling Count
    /// invariants of every ancestor, so serialization fails fast instead.
    #[error("Outline item '{id}' references unknown parent '{parent}'")]
    UnknownOutlineParent {
        /// Id of the offending item
        id: String,
        /// The parent id that could not be resolved
        parent: String,
    },

    /// An outline item referenced a destination name that was never registered.
    #[error("Outline item '{id}' references unknown destination '{destination}'")]
    UnknownDestination {
        /// Id of the offending item
        id: String,
        /// The destination name that could not be resolved
        destination: String,
    },

    /// Outline parent links form a cycle.
    ///
    /// Flat parent-id input can express loops the tree builder never
    /// produces; they would make descendant counting diverge.
    #[error("Outline item '{id}' is part of a parent cycle")]
    CircularOutline {
        /// Id of an item on the cycle
        id: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
