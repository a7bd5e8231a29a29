//! Error types for replica placement.

use thiserror::Error;

/// Errors returned by replication strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// Replication factor must be at least 1.
    #[error("invalid replication factor {0}: must be at least 1")]
    InvalidReplicationFactor(usize),
    /// The underlying ring lookup failed.
    #[error(transparent)]
    Ring(#[from] corelib::Error),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, ReplicationError>;
