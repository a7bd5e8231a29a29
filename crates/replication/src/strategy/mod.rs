//! Replication strategy abstractions.
//!
//! Replication strategies determine how many replicas to create and where
//! to place them on the ring.
//!
//! - **SimpleStrategy**: N replicas placed on distinct members clockwise
//!   from the key

pub mod simple;

pub use simple::SimpleStrategy;

use crate::error::Result;
use crate::placement::ReplicaPlacement;
use corelib::HashRing;

/// Trait for replication strategies.
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads.
pub trait ReplicationStrategy: Send + Sync + 'static {
    /// Number of copies this strategy aims for, primary included.
    fn replication_factor(&self) -> usize;

    /// Members that should hold `key`, primary first.
    ///
    /// # Arguments
    /// * `ring` - The hash ring to query
    /// * `key` - The key to find replicas for
    ///
    /// # Returns
    /// The primary and up to `replication_factor() - 1` distinct secondaries.
    /// Fails with the ring's `EmptyRing` error when there is nobody to place
    /// on.
    ///
    /// # Performance
    /// Should be O(log p + r) in the common case where p = positions on the
    /// ring and r = replication factor
    fn place(&self, ring: &HashRing, key: &str) -> Result<ReplicaPlacement>;

    /// Strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
