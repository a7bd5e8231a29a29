//! SipHash-1-3 hasher.

use crate::hash::traits::RingHasher;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// SipHash-1-3 with zero keys, truncated to 32 bits.
///
/// Slower than the other hashers; useful when keys may be chosen by an
/// adversary and a keyed hash is wanted later.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHasher;

impl RingHasher for SipHasher {
    fn hash(&self, bytes: &[u8]) -> u32 {
        let mut hasher = SipHasher13::new();
        hasher.write(bytes);
        hasher.finish() as u32
    }

    fn name(&self) -> &'static str {
        "siphash"
    }
}
