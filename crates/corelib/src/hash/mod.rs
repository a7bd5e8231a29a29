//! Position hashing for the consistent hash ring.
//!
//! A hasher turns an arbitrary byte string into a 32-bit position on the
//! ring. The same hasher places both member replicas and lookup keys, so it
//! must be fixed for the lifetime of a ring.

pub mod crc32;
pub mod fnv;
pub mod sip;
pub mod traits;
pub mod xxh3;

pub use crc32::Crc32Hasher;
pub use fnv::Fnv1aHasher;
pub use sip::SipHasher;
pub use traits::RingHasher;
pub use xxh3::Xxh3Hasher;
