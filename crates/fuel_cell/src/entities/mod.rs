//! Placed game entities
//!
//! Every entity has a position and a bounding sphere; the [`Spatial`]
//! trait exposes exactly that shared capability. Beyond it the three kinds
//! behave differently and are never handled as one group:
//!
//! - [`Obstacle`]: static, read-only during play
//! - [`Collectible`]: one-way `retrieved` flag set on overlap
//! - [`Vehicle`]: player-driven, validates moves against range and obstacles
//!
//! Bounding-sphere centers track the entity position on X and Z. Their Y is
//! fixed at zero when the sphere is merged, so collisions are planar.

pub mod collectible;
pub mod obstacle;
pub mod vehicle;

pub use collectible::Collectible;
pub use obstacle::Obstacle;
pub use vehicle::{MoveOutcome, RejectReason, Vehicle, VehicleTuning};

use fuel_engine::foundation::math::{Mat4, Vec3};
use fuel_engine::physics::BoundingSphere;
use fuel_engine::render::transforms;

/// Shared position + bounding volume capability
pub trait Spatial {
    /// World-space position
    fn position(&self) -> Vec3;

    /// Bounding sphere used for every collision test
    fn bounding_sphere(&self) -> &BoundingSphere;

    /// World matrix handed to the renderer
    fn world_matrix(&self) -> Mat4 {
        transforms::translation(self.position())
    }

    /// Matrix placing a unit sphere mesh over the bounding sphere
    fn bounding_sphere_matrix(&self) -> Mat4 {
        transforms::bounding_sphere_matrix(self.bounding_sphere())
    }

    /// Whether this entity's bounding sphere overlaps `other`'s
    fn overlaps(&self, other: &impl Spatial) -> bool
    where
        Self: Sized,
    {
        self.bounding_sphere().intersects(other.bounding_sphere())
    }
}
