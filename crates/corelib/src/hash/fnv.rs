//! 32-bit FNV-1a hasher.

use crate::hash::traits::RingHasher;

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a position hasher.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1aHasher;

impl RingHasher for Fnv1aHasher {
    fn hash(&self, bytes: &[u8]) -> u32 {
        bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
            (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }

    fn name(&self) -> &'static str {
        "fnv1a"
    }
}
