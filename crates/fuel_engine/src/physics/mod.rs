//! Physics module for collision detection
//!
//! Provides bounding-sphere primitives and the merge used to build one
//! sphere per entity from its sub-mesh volumes. There is no dynamics: no
//! forces, mass or restitution, only overlap tests.

pub mod bounding_volume;
pub mod collision;

pub use bounding_volume::{compute_merged_sphere, compute_scaled_sphere, merge_all};
pub use collision::BoundingSphere;

use thiserror::Error;

/// Collision setup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// A merged bounding volume was requested from zero sub-volumes
    #[error("Cannot build a bounding volume for '{entity}': no sub-mesh volumes")]
    EmptyVolumeSet {
        /// Entity whose construction failed
        entity: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_error_display() {
        let err = CollisionError::EmptyVolumeSet {
            entity: "fuel carrier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot build a bounding volume for 'fuel carrier': no sub-mesh volumes"
        );
    }
}
