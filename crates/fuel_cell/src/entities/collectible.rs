//! Collectible fuel cells

use super::Spatial;
use fuel_engine::foundation::math::Vec3;
use fuel_engine::physics::{compute_scaled_sphere, BoundingSphere, CollisionError};

/// A fuel cell waiting to be picked up
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    position: Vec3,
    bounding_sphere: BoundingSphere,
    retrieved: bool,
}

impl Collectible {
    /// Build a collectible from its mesh's sub-volumes
    ///
    /// `pickup_factor` scales the merged radius; below 1 the vehicle has to
    /// get closer than the visual mesh suggests.
    ///
    /// # Errors
    /// [`CollisionError::EmptyVolumeSet`] if `sub_volumes` is empty.
    pub fn new(sub_volumes: &[BoundingSphere], pickup_factor: f32) -> Result<Self, CollisionError> {
        Ok(Self {
            position: Vec3::zeros(),
            bounding_sphere: compute_scaled_sphere("fuel cell", sub_volumes, pickup_factor)?,
            retrieved: false,
        })
    }

    /// Same collectible placed at `position`
    #[must_use]
    pub fn placed_at(mut self, position: Vec3) -> Self {
        self.position = position;
        self.bounding_sphere = self.bounding_sphere.with_horizontal_center(position);
        self
    }

    /// Whether the vehicle has already picked this up
    pub fn is_retrieved(&self) -> bool {
        self.retrieved
    }

    /// Mark as retrieved if `vehicle_volume` overlaps this collectible
    ///
    /// Returns true only on the tick the flag flips. Once retrieved the
    /// flag never goes back and further calls do nothing.
    pub fn update_pickup(&mut self, vehicle_volume: &BoundingSphere) -> bool {
        if self.retrieved {
            return false;
        }
        if vehicle_volume.intersects(&self.bounding_sphere) {
            self.retrieved = true;
            log::debug!("Fuel cell at {:?} retrieved", self.position);
            return true;
        }
        false
    }
}

impl Spatial for Collectible {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cell_at(x: f32, z: f32) -> Collectible {
        Collectible::new(&[BoundingSphere::new(Vec3::new(0.0, 1.0, 0.0), 1.25)], 0.8)
            .unwrap()
            .placed_at(Vec3::new(x, 0.0, z))
    }

    #[test]
    fn test_new_collectible_not_retrieved() {
        let cell = cell_at(10.0, 10.0);
        assert!(!cell.is_retrieved());
        assert_relative_eq!(cell.bounding_sphere().radius, 1.0);
        assert_eq!(cell.bounding_sphere().center, Vec3::new(10.0, 0.0, 10.0));
    }

    #[test]
    fn test_pickup_on_overlap() {
        let mut cell = cell_at(0.0, 5.0);
        let far = BoundingSphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
        assert!(!cell.update_pickup(&far));
        assert!(!cell.is_retrieved());

        // Touching: distance 2 == 1 + 1
        let touching = BoundingSphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
        assert!(cell.update_pickup(&touching));
        assert!(cell.is_retrieved());
    }

    #[test]
    fn test_pickup_is_idempotent() {
        let mut cell = cell_at(0.0, 0.0);
        let on_top = BoundingSphere::new(Vec3::zeros(), 1.0);
        assert!(cell.update_pickup(&on_top));

        // Repeated overlap: no new event, state unchanged
        assert!(!cell.update_pickup(&on_top));
        // Moving away never un-retrieves
        assert!(!cell.update_pickup(&BoundingSphere::new(Vec3::new(50.0, 0.0, 50.0), 1.0)));
        assert!(cell.is_retrieved());
    }

    #[test]
    fn test_collectible_requires_volumes() {
        assert!(Collectible::new(&[], 0.8).is_err());
    }
}
