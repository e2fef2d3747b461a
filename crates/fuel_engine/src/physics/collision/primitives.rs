//! Primitive collision shapes and intersection algorithms
//!
//! Every entity in the game is approximated by a single bounding sphere,
//! so the sphere is the only primitive the collision layer needs.

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::new(Vec3::zeros(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    ///
    /// Touching spheres count as intersecting.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if `other` lies entirely inside this sphere
    pub fn contains(&self, other: &BoundingSphere) -> bool {
        let distance = (self.center - other.center).magnitude();
        distance + other.radius <= self.radius
    }

    /// Smallest sphere enclosing both this sphere and `other`
    ///
    /// If one sphere already contains the other the larger one is returned
    /// unchanged; otherwise the result is centred on the line joining the
    /// two centers, spanning from the far side of one to the far side of
    /// the other.
    pub fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        if self.contains(other) {
            return *self;
        }
        if other.contains(self) {
            return *other;
        }

        let offset = other.center - self.center;
        let distance = offset.magnitude();
        // Neither contains the other, so the centers cannot coincide.
        let radius = (distance + self.radius + other.radius) * 0.5;
        let center = self.center + offset * ((radius - self.radius) / distance);
        BoundingSphere::new(center, radius)
    }

    /// Same center, radius multiplied by `factor`
    pub fn scaled(&self, factor: f32) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius * factor)
    }

    /// Copy of this sphere with the center's X and Z replaced by `position`'s
    ///
    /// The vertical component of the center is left alone.
    pub fn with_horizontal_center(&self, position: Vec3) -> BoundingSphere {
        BoundingSphere::new(
            Vec3::new(position.x, self.center.y, position.z),
            self.radius,
        )
    }

    /// Copy of this sphere with the center dropped onto the Y = 0 plane
    pub fn flattened(&self) -> BoundingSphere {
        BoundingSphere::new(Vec3::new(self.center.x, 0.0, self.center.z), self.radius)
    }
}
