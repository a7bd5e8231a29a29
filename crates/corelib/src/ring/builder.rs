//! Builder for [`HashRing`].

use crate::config::HashAlgorithm;
use crate::error::{Error, Result};
use crate::hash::{Crc32Hasher, RingHasher};
use crate::ring::ring::{HashRing, DEFAULT_REPLICAS};
use std::fmt;
use std::sync::Arc;

/// Builder for configuring a ring before first use.
///
/// The hasher and replica count are fixed once the ring is built; changing
/// either afterwards would move every key.
///
/// ```
/// use corelib::{HashAlgorithm, RingBuilder};
///
/// let ring = RingBuilder::new()
///     .with_replicas(160)
///     .with_algorithm(HashAlgorithm::Fnv1a)
///     .add_members(["10.0.0.1:11211", "10.0.0.2:11211"])
///     .build()
///     .unwrap();
/// assert_eq!(ring.len(), 2);
/// assert_eq!(ring.position_count(), 320);
/// ```
pub struct RingBuilder {
    replicas: usize,
    hasher: Arc<dyn RingHasher>,
    members: Vec<String>,
}

impl RingBuilder {
    /// Builder with [`DEFAULT_REPLICAS`] and the CRC-32 hasher.
    pub fn new() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            hasher: Arc::new(Crc32Hasher),
            members: Vec::new(),
        }
    }

    /// Virtual positions per member. Zero is rejected by [`build`](Self::build).
    pub fn with_replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    /// Use a custom position hasher.
    pub fn with_hasher<H: RingHasher>(mut self, hasher: H) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    /// Use an already shared position hasher.
    pub fn with_shared_hasher(mut self, hasher: Arc<dyn RingHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Use one of the built-in position hashers.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hasher = algorithm.hasher();
        self
    }

    /// Seed the ring with `member`.
    pub fn add_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Seed the ring with every member in `members`.
    pub fn add_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Build the ring.
    pub fn build(self) -> Result<HashRing> {
        if self.replicas == 0 {
            return Err(Error::InvalidReplicaCount(self.replicas));
        }

        let ring = HashRing::from_parts(self.replicas, self.hasher);
        if !self.members.is_empty() {
            ring.set(&self.members)?;
        }
        Ok(ring)
    }
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuilder")
            .field("replicas", &self.replicas)
            .field("hasher", &self.hasher.name())
            .field("members", &self.members)
            .finish()
    }
}
