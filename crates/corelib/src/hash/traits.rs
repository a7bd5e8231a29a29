//! Core hasher trait definitions.

/// Maps a byte string to a position on the 32-bit ring.
///
/// Hashers are stateless and thread-safe, allowing concurrent lookups
/// without synchronization overhead. Any `Fn(&[u8]) -> u32` closure is a
/// hasher too:
///
/// ```
/// use corelib::HashRing;
///
/// let ring = HashRing::builder()
///     .with_hasher(|bytes: &[u8]| bytes.iter().map(|&b| u32::from(b)).sum::<u32>())
///     .build()
///     .unwrap();
/// assert_eq!(ring.hasher_name(), "custom");
/// ```
pub trait RingHasher: Send + Sync + 'static {
    /// Hashes `bytes` to a ring position.
    fn hash(&self, bytes: &[u8]) -> u32;

    /// Returns the name of this hasher.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> RingHasher for F
where
    F: Fn(&[u8]) -> u32 + Send + Sync + 'static,
{
    fn hash(&self, bytes: &[u8]) -> u32 {
        self(bytes)
    }
}
