//! Ring configuration.
//!
//! [`RingConfig`] is the serializable form of the knobs a ring accepts. Hosts
//! usually embed it in their own configuration file and call
//! [`RingConfig::build`] once at startup.

use crate::error::{Error, Result};
use crate::hash::{Crc32Hasher, Fnv1aHasher, RingHasher, SipHasher, Xxh3Hasher};
use crate::ring::{HashRing, RingBuilder, DEFAULT_REPLICAS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Built-in position hash functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// CRC-32/IEEE.
    #[default]
    Crc32,
    /// 32-bit FNV-1a.
    Fnv1a,
    /// XXH3-64, low 32 bits.
    Xxh3,
    /// SipHash-1-3, low 32 bits.
    #[serde(rename = "siphash")]
    SipHash,
}

impl HashAlgorithm {
    /// Shared hasher instance for this algorithm.
    pub fn hasher(self) -> Arc<dyn RingHasher> {
        match self {
            HashAlgorithm::Crc32 => Arc::new(Crc32Hasher),
            HashAlgorithm::Fnv1a => Arc::new(Fnv1aHasher),
            HashAlgorithm::Xxh3 => Arc::new(Xxh3Hasher),
            HashAlgorithm::SipHash => Arc::new(SipHasher),
        }
    }
}

/// Serializable ring configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Virtual positions per member.
    pub replicas: usize,
    /// Position hash function.
    pub hash: HashAlgorithm,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            hash: HashAlgorithm::default(),
        }
    }
}

impl RingConfig {
    /// Rejects configurations a ring cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.replicas == 0 {
            return Err(Error::InvalidReplicaCount(self.replicas));
        }
        Ok(())
    }

    /// Builder seeded from this configuration.
    pub fn builder(&self) -> RingBuilder {
        RingBuilder::new()
            .with_replicas(self.replicas)
            .with_algorithm(self.hash)
    }

    /// Builds an empty ring from this configuration.
    pub fn build(&self) -> Result<HashRing> {
        self.validate()?;
        self.builder().build()
    }
}
