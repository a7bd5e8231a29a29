//! Ring topology snapshots.
//!
//! A [`Topology`] copies the ordered index and its owners out from under the
//! ring's lock so callers can inspect placement, for example to check how
//! evenly the key space is spread, without blocking writers.

use crate::position::{Position, RING_SIZE};
use std::collections::{BTreeMap, BTreeSet};

/// Immutable view of a ring's positions at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    /// Ascending by position.
    entries: Vec<(Position, String)>,
}

impl Topology {
    pub(crate) fn new(entries: Vec<(Position, String)>) -> Self {
        Self { entries }
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(position, owner)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> {
        self.entries
            .iter()
            .map(|(position, owner)| (*position, owner.as_str()))
    }

    /// Member that owns a key hashed to `position`, or `None` when empty.
    pub fn owner_of(&self, position: Position) -> Option<&str> {
        let idx = self.entries.partition_point(|(p, _)| *p < position);
        self.entries
            .get(idx)
            .or_else(|| self.entries.first())
            .map(|(_, owner)| owner.as_str())
    }

    /// Distinct owners present in the snapshot.
    pub fn members(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|(_, owner)| owner.as_str()).collect()
    }

    /// Fraction of the key space each member owns.
    ///
    /// A position owns the arc from its predecessor (exclusive) up to itself
    /// (inclusive). Fractions sum to 1 for a non-empty ring.
    pub fn ownership(&self) -> BTreeMap<String, f64> {
        let mut arcs: BTreeMap<&str, u64> = BTreeMap::new();
        let len = self.entries.len();
        for (idx, (position, owner)) in self.entries.iter().enumerate() {
            let (prev, _) = &self.entries[(idx + len - 1) % len];
            *arcs.entry(owner.as_str()).or_default() += prev.distance_to(*position);
        }

        arcs.into_iter()
            .map(|(owner, arc)| (owner.to_owned(), arc as f64 / RING_SIZE as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology(entries: &[(u32, &str)]) -> Topology {
        Topology::new(
            entries
                .iter()
                .map(|(p, m)| (Position(*p), (*m).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn test_owner_of_wraps() {
        let t = topology(&[(100, "a"), (200, "b")]);
        assert_eq!(t.owner_of(Position(50)), Some("a"));
        assert_eq!(t.owner_of(Position(100)), Some("a"));
        assert_eq!(t.owner_of(Position(150)), Some("b"));
        assert_eq!(t.owner_of(Position(201)), Some("a"));
        assert_eq!(Topology::default().owner_of(Position(1)), None);
    }

    #[test]
    fn test_single_position_owns_everything() {
        let t = topology(&[(42, "a")]);
        assert_eq!(t.ownership().get("a").copied(), Some(1.0));
    }

    #[test]
    fn test_ownership_arcs() {
        let quarter = 1u32 << 30;
        let t = topology(&[(quarter, "a"), (2 * quarter, "b"), (3 * quarter, "a")]);
        let shares = t.ownership();
        assert_eq!(shares["b"], 0.25);
        assert_eq!(shares["a"], 0.75);
    }

    #[test]
    fn test_empty_ownership() {
        assert!(Topology::default().ownership().is_empty());
        assert!(Topology::default().members().is_empty());
    }
}
