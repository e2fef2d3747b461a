//! Static obstacles ("barriers")

use super::Spatial;
use fuel_engine::foundation::math::Vec3;
use fuel_engine::physics::{compute_scaled_sphere, BoundingSphere, CollisionError};

/// Immovable obstacle
///
/// The kind label only selects which mesh to draw; all obstacles collide
/// the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    kind: String,
    position: Vec3,
    bounding_sphere: BoundingSphere,
}

impl Obstacle {
    /// Build an obstacle from its mesh's sub-volumes
    ///
    /// # Errors
    /// [`CollisionError::EmptyVolumeSet`] if `sub_volumes` is empty.
    pub fn new(
        kind: impl Into<String>,
        sub_volumes: &[BoundingSphere],
        bounding_factor: f32,
    ) -> Result<Self, CollisionError> {
        let kind = kind.into();
        let bounding_sphere = compute_scaled_sphere(&kind, sub_volumes, bounding_factor)?;
        Ok(Self {
            kind,
            position: Vec3::zeros(),
            bounding_sphere,
        })
    }

    /// Same obstacle placed at `position`
    #[must_use]
    pub fn placed_at(mut self, position: Vec3) -> Self {
        self.position = position;
        self.bounding_sphere = self.bounding_sphere.with_horizontal_center(position);
        self
    }

    /// Asset label
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Spatial for Obstacle {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }
}
