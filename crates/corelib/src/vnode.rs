//! Virtual node abstractions.
//!
//! Each member is placed on the ring at `replicas` positions instead of one.
//! More positions smooth out the share of keys each member owns, at the cost
//! of a larger placement table:
//!
//! - **Memory**: O(m * r) positions for m members with r replicas each
//! - **Lookup**: O(log(m * r)) binary search over the ordered index
//! - **Rebalancing**: only keys owned by the added or removed member move

use crate::hash::RingHasher;
use crate::position::Position;
use std::fmt;

/// Separator between the member name and the replica index in the hashed key.
pub const REPLICA_SEPARATOR: char = '|';

/// Builds the string hashed for replica `replica` of `member`.
///
/// The format `"{member}|{replica}"` is part of the ring contract: changing it
/// moves every key.
pub fn replica_key(member: &str, replica: usize) -> String {
    format!("{member}{REPLICA_SEPARATOR}{replica}")
}

/// One of a member's positions on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// Position on the ring.
    pub position: Position,
    /// Replica index within the owning member, `0..replicas`.
    pub replica: usize,
}

impl VirtualNode {
    /// Create a new virtual node.
    #[inline]
    pub fn new(position: Position, replica: usize) -> Self {
        Self { position, replica }
    }

    /// Create the virtual node for `member`'s replica `replica`, hashing
    /// [`replica_key`] with `hasher`.
    pub fn from_index(hasher: &dyn RingHasher, member: &str, replica: usize) -> Self {
        let key = replica_key(member, replica);
        Self::new(Position(hasher.hash(key.as_bytes())), replica)
    }

    /// All `replicas` virtual nodes for `member`, in replica order.
    pub fn for_member<'a>(
        hasher: &'a dyn RingHasher,
        member: &'a str,
        replicas: usize,
    ) -> impl Iterator<Item = VirtualNode> + 'a {
        (0..replicas).map(move |replica| Self::from_index(hasher, member, replica))
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(position={}, replica={})", self.position, self.replica)
    }
}
