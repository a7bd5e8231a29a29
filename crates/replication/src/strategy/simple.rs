//! Simple replication strategy.
//!
//! Places N replicas on distinct members, walking clockwise from the key's
//! position. Works well for single data center deployments where failure
//! domains don't matter.
//!
//! # Performance
//!
//! - **Time**: O(log p + p) worst case where p = positions on the ring;
//!   the walk usually stops after a few positions
//! - **Space**: O(r) for r replicas

use crate::error::{ReplicationError, Result};
use crate::placement::ReplicaPlacement;
use crate::strategy::ReplicationStrategy;
use corelib::{Error, HashRing};
use tracing::debug;

/// Default number of copies, primary included.
pub const DEFAULT_REPLICATION_FACTOR: usize = 3;

/// Simple replication strategy: N replicas placed sequentially around the ring.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
/// use replication::{ReplicationStrategy, SimpleStrategy};
///
/// let ring = HashRing::new();
/// for member in ["abcdefg", "hijklmn", "opqrstu"] {
///     ring.add(member).unwrap();
/// }
///
/// let placement = SimpleStrategy::new(2).place(&ring, "99999999").unwrap();
/// assert_eq!(placement.primary, "abcdefg");
/// assert_eq!(placement.secondaries, vec!["opqrstu"]);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    replication_factor: usize,
}

impl SimpleStrategy {
    /// Create a strategy placing `replication_factor` copies.
    ///
    /// A factor of 0 is treated as 1; use [`try_new`](Self::try_new) to
    /// reject it instead.
    pub fn new(replication_factor: usize) -> Self {
        Self {
            replication_factor: replication_factor.max(1),
        }
    }

    /// Create a strategy, rejecting a zero factor.
    pub fn try_new(replication_factor: usize) -> Result<Self> {
        if replication_factor == 0 {
            return Err(ReplicationError::InvalidReplicationFactor(replication_factor));
        }
        Ok(Self { replication_factor })
    }
}

impl Default for SimpleStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_REPLICATION_FACTOR)
    }
}

impl ReplicationStrategy for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn place(&self, ring: &HashRing, key: &str) -> Result<ReplicaPlacement> {
        let owners = ring.get_n(key, self.replication_factor)?;
        let placement = ReplicaPlacement::from_owners(owners).ok_or(Error::EmptyRing)?;
        if placement.is_degraded(self.replication_factor) {
            debug!(
                key,
                wanted = self.replication_factor,
                placed = placement.len(),
                "fewer members than replication factor"
            );
        }
        Ok(placement)
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(members: &[&str]) -> HashRing {
        let ring = HashRing::new();
        for member in members {
            ring.add(member).unwrap();
        }
        ring
    }

    #[test]
    fn test_simple_strategy_replication_factor() {
        assert_eq!(SimpleStrategy::new(3).replication_factor(), 3);
        assert_eq!(SimpleStrategy::default().replication_factor(), 3);
        assert_eq!(SimpleStrategy::new(0).replication_factor(), 1);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(
            SimpleStrategy::try_new(0).unwrap_err(),
            ReplicationError::InvalidReplicationFactor(0)
        );
    }

    #[test]
    fn test_simple_strategy_replicas() {
        let ring = ring(&["abcdefg", "hijklmn", "opqrstu"]);
        let placement = SimpleStrategy::new(3).place(&ring, "iiiiii").unwrap();

        assert_eq!(placement.primary, "hijklmn");
        assert_eq!(placement.secondaries, vec!["opqrstu", "abcdefg"]);
        assert!(!placement.is_degraded(3));
    }

    #[test]
    fn test_primary_matches_ring_get() {
        let ring = ring(&["node1", "node2", "node3", "node4"]);
        let strategy = SimpleStrategy::default();
        for key in ["a", "b", "user:42", "session:9"] {
            let placement = strategy.place(&ring, key).unwrap();
            assert_eq!(placement.primary, ring.get(key).unwrap());
            assert_eq!(placement.len(), 3);
        }
    }

    #[test]
    fn test_degraded_when_ring_small() {
        let ring = ring(&["abcdefg"]);
        let placement = SimpleStrategy::new(3).place(&ring, "key").unwrap();
        assert_eq!(placement.all(), vec!["abcdefg"]);
        assert!(placement.is_degraded(3));
    }

    #[test]
    fn test_empty_ring() {
        let ring = HashRing::new();
        let err = SimpleStrategy::default().place(&ring, "key").unwrap_err();
        assert_eq!(err, ReplicationError::Ring(Error::EmptyRing));
    }
}
