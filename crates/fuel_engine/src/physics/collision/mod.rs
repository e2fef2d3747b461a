//! Collision primitives
//!
//! Collision in the game is sphere-only: each entity carries one bounding
//! sphere and every query is a sphere-sphere overlap test.
//!
//! # Key Types
//!
//! - [`BoundingSphere`] - center + radius with inclusive intersection and merge

pub mod primitives;

// Re-export commonly used types
pub use primitives::BoundingSphere;
