//! Error types for the weft workspace.
//!
//! All crates return `WeftResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for weft.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The node network is not in a state that allows the operation.
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// A grid index fell outside the network.
    #[error("Node ({column}, {row}) is outside the {columns}x{rows} network")]
    NodeOutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    /// A force generator was rejected.
    #[error("Invalid force generator: {0}")]
    InvalidForce(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
