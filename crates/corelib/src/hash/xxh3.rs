//! XXH3 hasher.

use crate::hash::traits::RingHasher;
use xxhash_rust::xxh3::xxh3_64;

/// XXH3-64 truncated to its low 32 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Hasher;

impl RingHasher for Xxh3Hasher {
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u32 {
        xxh3_64(bytes) as u32
    }

    fn name(&self) -> &'static str {
        "xxh3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xxh3_truncates_64_bit_hash() {
        assert_eq!(Xxh3Hasher.hash(b"node1|0"), xxh3_64(b"node1|0") as u32);
        assert_eq!(Xxh3Hasher.hash(b""), 0x38D3_94C2);
    }

    #[test]
    fn test_xxh3_deterministic() {
        assert_eq!(Xxh3Hasher.hash(b"node1|0"), Xxh3Hasher.hash(b"node1|0"));
        assert_ne!(Xxh3Hasher.hash(b"node1|0"), Xxh3Hasher.hash(b"node1|1"));
    }
}
