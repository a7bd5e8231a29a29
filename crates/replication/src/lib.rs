//! Replication strategies for consistent hashing.
//!
//! This crate decides which ring members should hold copies of a key:
//! - How many replicas to place
//! - Which members hold them, primary first
//!
//! Moving data to those members is the caller's job.

pub mod error;
pub mod placement;
pub mod strategy;

pub use error::ReplicationError;
pub use placement::ReplicaPlacement;
pub use strategy::{ReplicationStrategy, SimpleStrategy};
