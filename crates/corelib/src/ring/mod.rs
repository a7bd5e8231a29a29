//! Consistent hash ring implementation.
//!
//! The ring manages member positions and provides efficient lookup
//! operations for finding the member(s) responsible for keys.

pub mod builder;
pub mod ring;

pub use builder::RingBuilder;
pub use ring::{HashRing, DEFAULT_REPLICAS};
