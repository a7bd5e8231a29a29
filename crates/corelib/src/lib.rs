//! Core library for consistent hashing implementation.
//!
//! This crate provides a consistent hash ring that maps arbitrary string keys
//! onto a dynamic set of named members:
//! - Pluggable 32-bit position hashers
//! - Ring positions and virtual nodes
//! - A reader/writer guarded ring with single and multi-owner lookup
//! - Builder and serde-backed configuration
//! - Topology snapshots for load-distribution analysis
//!
//! ```
//! use corelib::HashRing;
//!
//! let ring = HashRing::new();
//! ring.add("abcdefg").unwrap();
//! ring.add("hijklmn").unwrap();
//! ring.add("opqrstu").unwrap();
//!
//! assert_eq!(ring.get("ggg").unwrap(), "opqrstu");
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod position;
pub mod ring;
pub mod topology;
pub mod vnode;

pub use config::{HashAlgorithm, RingConfig};
pub use error::{Error, Result};
pub use hash::RingHasher;
pub use position::Position;
pub use ring::{HashRing, RingBuilder, DEFAULT_REPLICAS};
pub use topology::Topology;
pub use vnode::VirtualNode;
