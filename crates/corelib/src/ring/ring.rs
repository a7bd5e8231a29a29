//! Hash ring data structure.
//!
//! # Layout
//!
//! - **Placement table**: `Position -> member`, one entry per live virtual node
//! - **Ordered index**: every key of the placement table, sorted ascending
//! - **Member set**: names added and not yet removed
//!
//! Mutations rebuild the ordered index wholesale under the write lock, so a
//! reader never observes a half-updated index.
//!
//! # Collisions
//!
//! When two virtual nodes hash to the same position the one inserted last
//! owns it. Existing key assignments depend on this, so it stays.

use crate::error::{Error, Result};
use crate::hash::{Crc32Hasher, RingHasher};
use crate::position::Position;
use crate::ring::builder::RingBuilder;
use crate::topology::Topology;
use crate::vnode::VirtualNode;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Virtual positions per member when none is configured.
pub const DEFAULT_REPLICAS: usize = 20;

#[derive(Debug, Default)]
struct RingState {
    circle: HashMap<Position, String>,
    sorted: Vec<Position>,
    members: BTreeSet<String>,
}

impl RingState {
    /// Places every replica of `member`, overwriting colliding positions.
    fn insert(&mut self, hasher: &dyn RingHasher, member: &str, replicas: usize) {
        for vnode in VirtualNode::for_member(hasher, member, replicas) {
            self.circle.insert(vnode.position, member.to_owned());
        }
        self.members.insert(member.to_owned());
    }

    /// Drops `member` and the positions it still owns. Returns `false`, with
    /// nothing touched, when `member` is absent.
    fn evict(&mut self, hasher: &dyn RingHasher, member: &str, replicas: usize) -> bool {
        if !self.members.remove(member) {
            return false;
        }
        for vnode in VirtualNode::for_member(hasher, member, replicas) {
            // A later member may have taken this position over.
            if self.circle.get(&vnode.position).is_some_and(|owner| owner == member) {
                self.circle.remove(&vnode.position);
            }
        }
        true
    }

    /// Re-sorts the ordered index and drops members left without a position.
    fn rebuild(&mut self) {
        let mut sorted: Vec<Position> = self.circle.keys().copied().collect();
        sorted.sort_unstable();
        self.sorted = sorted;

        let live: HashSet<&str> = self.circle.values().map(String::as_str).collect();
        self.members.retain(|member| live.contains(member.as_str()));
    }

    /// Index of the first position `>= position`, wrapping to 0.
    fn search(&self, position: Position) -> usize {
        let idx = self.sorted.partition_point(|p| *p < position);
        if idx == self.sorted.len() {
            0
        } else {
            idx
        }
    }

    fn owner_at(&self, idx: usize) -> &str {
        // The index and the table always hold the same key set.
        &self.circle[&self.sorted[idx]]
    }

    /// Owners of every position, clockwise from `start`, wrapping once.
    fn walk(&self, start: usize) -> impl Iterator<Item = &str> + '_ {
        self.sorted[start..]
            .iter()
            .chain(&self.sorted[..start])
            .map(move |position| self.circle[position].as_str())
    }

    fn entries(&self) -> Vec<(Position, String)> {
        self.sorted
            .iter()
            .map(|position| (*position, self.circle[position].clone()))
            .collect()
    }
}

fn validate_member(member: &str) -> Result<()> {
    if member.is_empty() {
        return Err(Error::InvalidMember("member name must not be empty".into()));
    }
    Ok(())
}

/// Consistent hash ring mapping string keys to named members.
///
/// All operations take `&self`; share the ring with `Arc<HashRing>`.
/// Lookups run in parallel under a read lock, mutations serialize under the
/// write lock.
///
/// ```
/// use corelib::{Error, HashRing};
///
/// let ring = HashRing::new();
/// assert_eq!(ring.get("key"), Err(Error::EmptyRing));
///
/// ring.add("cache-a").unwrap();
/// ring.add("cache-b").unwrap();
/// let (primary, backup) = ring.get_two("key").unwrap();
/// assert_ne!(primary, backup);
/// ```
pub struct HashRing {
    state: RwLock<RingState>,
    hasher: Arc<dyn RingHasher>,
    replicas: usize,
}

impl HashRing {
    /// Create an empty ring with [`DEFAULT_REPLICAS`] and the CRC-32 hasher.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_REPLICAS, Arc::new(Crc32Hasher))
    }

    /// Create an empty ring with `replicas` virtual positions per member.
    pub fn with_replicas(replicas: usize) -> Result<Self> {
        RingBuilder::new().with_replicas(replicas).build()
    }

    /// Start building a ring.
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    /// Callers must have validated `replicas`.
    pub(crate) fn from_parts(replicas: usize, hasher: Arc<dyn RingHasher>) -> Self {
        Self {
            state: RwLock::new(RingState::default()),
            hasher,
            replicas,
        }
    }

    /// Add `member` to the ring.
    ///
    /// Places `replicas` virtual nodes for the member, then rebuilds the
    /// ordered index. Re-adding a present member places the same positions
    /// again, so it is idempotent.
    ///
    /// # Arguments
    /// * `member` - Non-empty member name, e.g. a server address
    ///
    /// # Returns
    /// `InvalidMember` for an empty name.
    ///
    /// # Performance
    /// - **Time**: O(p log p) where p = positions on the ring (index rebuild)
    /// - **Lock**: exclusive for the whole call
    pub fn add(&self, member: &str) -> Result<()> {
        validate_member(member)?;

        let mut state = self.state.write();
        state.insert(self.hasher.as_ref(), member, self.replicas);
        state.rebuild();
        debug!(
            member,
            replicas = self.replicas,
            positions = state.sorted.len(),
            "added member to ring"
        );
        Ok(())
    }

    /// Remove `member` from the ring.
    ///
    /// Deletes the member's virtual nodes and rebuilds the ordered index. A
    /// position that a later member took over on collision stays with that
    /// member.
    ///
    /// # Returns
    /// Whether the member was present. Removing an absent member leaves the
    /// ring untouched.
    ///
    /// # Performance
    /// - **Time**: O(p log p) where p = positions on the ring
    /// - **Lock**: exclusive for the whole call
    pub fn remove(&self, member: &str) -> bool {
        let mut state = self.state.write();
        if !state.evict(self.hasher.as_ref(), member, self.replicas) {
            return false;
        }
        state.rebuild();
        debug!(member, positions = state.sorted.len(), "removed member from ring");
        true
    }

    /// Replace the whole membership with `members` atomically.
    ///
    /// Members absent from `members` are removed and new ones are added;
    /// members in both are left as they are. Nothing changes if any name is
    /// invalid.
    pub fn set<I, S>(&self, members: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted = members
            .into_iter()
            .map(|member| {
                let member = member.as_ref();
                validate_member(member).map(|()| member.to_owned())
            })
            .collect::<Result<BTreeSet<String>>>()?;

        let mut state = self.state.write();
        let stale: Vec<String> = state.members.difference(&wanted).cloned().collect();
        let fresh: Vec<String> = wanted.difference(&state.members).cloned().collect();
        if stale.is_empty() && fresh.is_empty() {
            return Ok(());
        }

        for member in &stale {
            state.evict(self.hasher.as_ref(), member, self.replicas);
        }
        for member in &fresh {
            state.insert(self.hasher.as_ref(), member, self.replicas);
        }
        state.rebuild();
        debug!(
            added = fresh.len(),
            removed = stale.len(),
            positions = state.sorted.len(),
            "replaced ring membership"
        );
        Ok(())
    }

    /// Member owning `key`.
    ///
    /// # Algorithm
    ///
    /// 1. Hash `key` to a position
    /// 2. Binary-search the ordered index for the first position `>=` it
    /// 3. Wrap to the lowest position if the key hashes past the last one
    ///
    /// # Returns
    /// `EmptyRing` when the ring has no members.
    ///
    /// # Performance
    /// - **Time**: O(log p) where p = positions on the ring
    /// - **Lock**: shared, so lookups run in parallel
    pub fn get(&self, key: &str) -> Result<String> {
        let state = self.state.read();
        if state.sorted.is_empty() {
            return Err(Error::EmptyRing);
        }

        let position = self.hash_key(key);
        let owner = state.owner_at(state.search(position));
        trace!(key, %position, owner, "resolved key");
        Ok(owner.to_owned())
    }

    /// Up to `n` distinct members for `key`, in clockwise order from its
    /// position.
    ///
    /// Starts where [`get`](Self::get) lands and walks the ordered index,
    /// skipping further virtual nodes of members already collected.
    ///
    /// # Arguments
    /// * `key` - The key to place
    /// * `n` - Number of distinct members wanted
    ///
    /// # Returns
    /// Members in ring-walk order, owner first. Fewer than `n`, without error,
    /// when the ring holds fewer members. `EmptyRing` when it holds none.
    ///
    /// # Performance
    /// - **Time**: O(log p + p) worst case; the walk usually stops early
    /// - **Space**: O(n)
    pub fn get_n(&self, key: &str, n: usize) -> Result<Vec<String>> {
        let state = self.state.read();
        if state.sorted.is_empty() {
            return Err(Error::EmptyRing);
        }

        let want = n.min(state.members.len());
        let start = state.search(self.hash_key(key));
        let mut owners: Vec<String> = Vec::with_capacity(want);
        for member in state.walk(start) {
            if owners.len() == want {
                break;
            }
            if !owners.iter().any(|owner| owner == member) {
                owners.push(member.to_owned());
            }
        }
        Ok(owners)
    }

    /// The first two distinct members for `key`.
    ///
    /// Unlike [`get_n`](Self::get_n), the result always has two slots: on a
    /// one-member ring the second is an empty string, not an error.
    pub fn get_two(&self, key: &str) -> Result<(String, String)> {
        let mut owners = self.get_n(key, 2)?.into_iter();
        let first = owners.next().unwrap_or_default();
        let second = owners.next().unwrap_or_default();
        Ok((first, second))
    }

    /// Present members, sorted by name.
    pub fn members(&self) -> Vec<String> {
        self.state.read().members.iter().cloned().collect()
    }

    /// Whether `member` is on the ring.
    pub fn contains(&self, member: &str) -> bool {
        self.state.read().members.contains(member)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.state.read().members.len()
    }

    /// True when the ring has no members.
    pub fn is_empty(&self) -> bool {
        self.state.read().members.is_empty()
    }

    /// Number of occupied positions (size of the ordered index).
    pub fn position_count(&self) -> usize {
        self.state.read().sorted.len()
    }

    /// Ordered `(position, owner)` pairs, ascending by position.
    pub fn positions(&self) -> Vec<(Position, String)> {
        self.state.read().entries()
    }

    /// Consistent snapshot of the ring for offline analysis.
    pub fn topology(&self) -> Topology {
        Topology::new(self.state.read().entries())
    }

    /// Virtual positions per member.
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Name of the position hasher.
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Ring position of `key`.
    pub fn hash_key(&self, key: &str) -> Position {
        Position(self.hasher.hash(key.as_bytes()))
    }
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("hasher", &self.hasher.name())
            .field("replicas", &self.replicas)
            .field("members", &state.members)
            .field("positions", &state.sorted.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(positions: &[Position]) -> bool {
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_index_matches_table() {
        let ring = HashRing::new();
        ring.add("abcdefg").unwrap();
        ring.add("qwer").unwrap();

        let state = ring.state.read();
        assert_eq!(state.circle.len(), 40);
        assert_eq!(state.sorted.len(), 40);
        assert!(is_sorted(&state.sorted));
        assert!(state.sorted.iter().all(|p| state.circle.contains_key(p)));
    }

    #[test]
    fn test_search_wraps() {
        let mut state = RingState::default();
        for (pos, member) in [(10, "a"), (20, "b"), (30, "c")] {
            state.circle.insert(Position(pos), member.to_owned());
        }
        state.rebuild();

        assert_eq!(state.search(Position(0)), 0);
        assert_eq!(state.search(Position(10)), 0);
        assert_eq!(state.search(Position(11)), 1);
        assert_eq!(state.search(Position(30)), 2);
        assert_eq!(state.search(Position(31)), 0);
    }

    #[test]
    fn test_walk_wraps_once() {
        let mut state = RingState::default();
        for (pos, member) in [(10, "a"), (20, "b"), (30, "c")] {
            state.circle.insert(Position(pos), member.to_owned());
        }
        state.rebuild();

        let walked: Vec<&str> = state.walk(2).collect();
        assert_eq!(walked, vec!["c", "a", "b"]);
    }

    /// Replica `i` of a member starting with letter `c` lands on `(c - 'a') + i`.
    fn letter_offset_hasher(bytes: &[u8]) -> u32 {
        let first = bytes.first().map_or(0, |b| u32::from(b.wrapping_sub(b'a')));
        let last = bytes.last().map_or(0, |b| u32::from(b.wrapping_sub(b'0')));
        first + last
    }

    #[test]
    fn test_collision_last_insert_wins() {
        // Every replica key of a 3-letter member is 5 bytes long.
        let ring = HashRing::builder()
            .with_replicas(3)
            .with_hasher(|bytes: &[u8]| bytes.len() as u32)
            .build()
            .unwrap();

        ring.add("aaa").unwrap();
        assert_eq!(ring.position_count(), 1);
        ring.add("bbb").unwrap();
        assert_eq!(ring.position_count(), 1);
        assert_eq!(ring.get("any").unwrap(), "bbb");

        // aaa no longer owns any position, so it is no longer a member.
        assert_eq!(ring.members(), vec!["bbb"]);
        assert!(!ring.contains("aaa"));
        assert_eq!(ring.len(), 1);
        assert!(!ring.remove("aaa"));
        assert_eq!(ring.get("any").unwrap(), "bbb");

        assert!(ring.remove("bbb"));
        assert_eq!(ring.position_count(), 0);
        assert!(ring.is_empty());
        assert_eq!(ring.get("any"), Err(Error::EmptyRing));
    }

    #[test]
    fn test_partial_collision_keeps_both_members() {
        let ring = HashRing::builder()
            .with_replicas(3)
            .with_hasher(letter_offset_hasher)
            .build()
            .unwrap();

        // aaa sits on 0, 1, 2; bbb takes over 1 and 2 and adds 3.
        ring.add("aaa").unwrap();
        ring.add("bbb").unwrap();
        assert_eq!(ring.position_count(), 4);
        assert_eq!(ring.members(), vec!["aaa", "bbb"]);
        assert_eq!(ring.get("a0").unwrap(), "aaa");
        assert_eq!(ring.get("a1").unwrap(), "bbb");
        assert_eq!(ring.get_n("a0", 5).unwrap(), vec!["aaa", "bbb"]);

        // Removing aaa keeps the positions bbb took over.
        assert!(ring.remove("aaa"));
        assert_eq!(ring.position_count(), 3);
        assert_eq!(ring.members(), vec!["bbb"]);
        assert_eq!(ring.get("a0").unwrap(), "bbb");
    }

    #[test]
    fn test_get_n_with_shadowed_member_terminates() {
        let ring = HashRing::builder()
            .with_replicas(3)
            .with_hasher(|bytes: &[u8]| bytes.len() as u32)
            .build()
            .unwrap();
        ring.add("aaa").unwrap();
        ring.add("bbb").unwrap();

        assert_eq!(ring.get_n("key", 5).unwrap(), vec!["bbb"]);
        assert_eq!(ring.get_two("key").unwrap(), ("bbb".to_owned(), String::new()));
    }

    #[test]
    fn test_debug_output() {
        let ring = HashRing::new();
        ring.add("node1").unwrap();
        let debug = format!("{ring:?}");
        assert!(debug.contains("crc32"));
        assert!(debug.contains("node1"));
    }
}
