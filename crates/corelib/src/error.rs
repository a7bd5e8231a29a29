//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Every variant is a caller precondition violation; the ring never retries
/// or swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lookup on a ring with no members.
    #[error("empty ring: no members have been added")]
    EmptyRing,
    /// Replica count must be a positive integer.
    #[error("invalid replica count {0}: must be at least 1")]
    InvalidReplicaCount(usize),
    /// Member identifiers must be non-empty.
    #[error("invalid member: {0}")]
    InvalidMember(String),
}
