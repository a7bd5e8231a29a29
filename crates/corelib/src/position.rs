//! Ring position implementation.

use std::fmt;

/// Number of distinct positions on the ring (2^32).
pub const RING_SIZE: u64 = 1 << 32;

/// A position on the 32-bit consistent hash ring.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Position(pub u32);

impl Position {
    /// Lowest position on the ring.
    pub const MIN: Position = Position(u32::MIN);
    /// Highest position on the ring.
    pub const MAX: Position = Position(u32::MAX);

    /// Raw position value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Clockwise distance from `self` to `other`.
    ///
    /// Equal positions are a full circle apart, so a lone position owns the
    /// whole ring.
    pub fn distance_to(self, other: Position) -> u64 {
        if other.0 > self.0 {
            u64::from(other.0 - self.0)
        } else {
            RING_SIZE - u64::from(self.0 - other.0)
        }
    }
}

impl From<u32> for Position {
    fn from(value: u32) -> Self {
        Position(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_clockwise() {
        assert_eq!(Position(100).distance_to(Position(200)), 100);
    }

    #[test]
    fn test_distance_wraps() {
        assert_eq!(Position(u32::MAX).distance_to(Position(0)), 1);
        assert_eq!(Position(200).distance_to(Position(100)), RING_SIZE - 100);
    }

    #[test]
    fn test_distance_to_self_is_full_circle() {
        assert_eq!(Position(7).distance_to(Position(7)), RING_SIZE);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Position(0xbeef).to_string(), "0000beef");
    }
}
