//! CRC-32 hasher, the ring default.

use crate::hash::traits::RingHasher;

/// CRC-32/IEEE position hasher.
///
/// Default for every ring. Test vectors and existing key assignments depend
/// on it, so do not change the polynomial.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32Hasher;

impl RingHasher for Crc32Hasher {
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u32 {
        crc32fast::hash(bytes)
    }

    fn name(&self) -> &'static str {
        "crc32"
    }
}
