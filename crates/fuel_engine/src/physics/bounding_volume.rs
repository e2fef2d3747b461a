//! Merged bounding volumes for multi-mesh models
//!
//! A model is made of several sub-meshes, each with its own bounding
//! sphere. Collision tests use a single sphere per entity, built by folding
//! the sub-mesh spheres together pairwise in order. One sphere test then
//! stands in for one test per sub-mesh.
//!
//! The merged center is dropped onto the Y = 0 plane, which makes every
//! collision test in the game effectively planar.

use super::collision::BoundingSphere;
use super::CollisionError;

/// Fold `volumes` into one enclosing sphere, in order
///
/// Starts from the first sphere and merges each following sphere into the
/// running result. Returns `None` for an empty slice. The result is not
/// flattened.
pub fn merge_all(volumes: &[BoundingSphere]) -> Option<BoundingSphere> {
    let (first, rest) = volumes.split_first()?;
    Some(rest.iter().fold(*first, |merged, sphere| merged.merged(sphere)))
}

/// Merged bounding sphere of an entity's sub-meshes, flattened to Y = 0
///
/// `entity` names the owner for the error message.
///
/// # Errors
/// [`CollisionError::EmptyVolumeSet`] when `volumes` is empty; the entity
/// cannot be built without a bounding volume.
pub fn compute_merged_sphere(
    entity: &str,
    volumes: &[BoundingSphere],
) -> Result<BoundingSphere, CollisionError> {
    let merged = merge_all(volumes).ok_or_else(|| CollisionError::EmptyVolumeSet {
        entity: entity.to_string(),
    })?;

    log::trace!(
        "Merged {} sub-volumes for '{}' into radius {:.3}",
        volumes.len(),
        entity,
        merged.radius
    );

    Ok(merged.flattened())
}

/// Merged sphere with its radius multiplied by `factor`
///
/// Factors below 1 tighten the hitbox relative to the visual mesh, factors
/// above 1 loosen it.
///
/// # Errors
/// Same as [`compute_merged_sphere`].
pub fn compute_scaled_sphere(
    entity: &str,
    volumes: &[BoundingSphere],
    factor: f32,
) -> Result<BoundingSphere, CollisionError> {
    compute_merged_sphere(entity, volumes).map(|sphere| sphere.scaled(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{utils, Vec3};
    use approx::assert_relative_eq;

    fn sphere(x: f32, y: f32, z: f32, radius: f32) -> BoundingSphere {
        BoundingSphere::new(Vec3::new(x, y, z), radius)
    }

    fn assert_contains(merged: &BoundingSphere, inputs: &[BoundingSphere]) {
        for input in inputs {
            let reach = (merged.center - input.center).magnitude() + input.radius;
            assert!(
                reach <= merged.radius * (1.0 + 1e-5),
                "{input:?} escapes {merged:?}"
            );
        }
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let result = compute_merged_sphere("barrier", &[]);
        assert!(matches!(
            result,
            Err(CollisionError::EmptyVolumeSet { ref entity }) if entity == "barrier"
        ));
        assert!(merge_all(&[]).is_none());
    }

    #[test]
    fn test_single_volume_is_flattened() {
        let merged = compute_merged_sphere("cell", &[sphere(1.0, 3.0, 2.0, 0.5)]).unwrap();
        assert_eq!(merged, sphere(1.0, 0.0, 2.0, 0.5));
    }

    #[test]
    fn test_merge_contains_every_input() {
        let inputs = [
            sphere(0.0, 0.0, 0.0, 1.0),
            sphere(3.0, 1.0, -2.0, 0.5),
            sphere(-4.0, 2.0, 1.0, 2.0),
            sphere(1.0, -1.0, 6.0, 1.5),
            sphere(0.5, 0.0, 0.5, 0.1),
        ];
        let merged = merge_all(&inputs).unwrap();
        assert_contains(&merged, &inputs);
    }

    #[test]
    fn test_flattened_merge_contains_inputs_horizontally() {
        let inputs = [
            sphere(0.0, 4.0, 0.0, 1.0),
            sphere(2.0, 5.0, 2.0, 1.0),
            sphere(-3.0, 6.0, 1.0, 0.5),
        ];
        let merged = compute_merged_sphere("carrier", &inputs).unwrap();

        assert_eq!(merged.center.y, 0.0);
        for input in &inputs {
            let reach = utils::horizontal_distance(merged.center, input.center) + input.radius;
            assert!(reach <= merged.radius * (1.0 + 1e-5));
        }
    }

    #[test]
    fn test_merge_order_invariance() {
        let a = sphere(-5.0, 0.0, 0.0, 1.0);
        let b = sphere(0.0, 0.0, 0.0, 1.0);
        let c = sphere(5.0, 0.0, 0.0, 1.0);

        let orders = [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]];
        let reference = merge_all(&orders[0]).unwrap();
        assert_relative_eq!(reference.radius, 6.0, epsilon = 1e-5);

        for order in &orders[1..] {
            let merged = merge_all(order).unwrap();
            assert_relative_eq!(merged.radius, reference.radius, epsilon = 1e-5);
            assert_relative_eq!(merged.center, reference.center, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_nested_volumes_order_invariance() {
        let hull = sphere(0.0, 0.0, 0.0, 10.0);
        let wheel = sphere(3.0, 0.0, 3.0, 1.0);
        let cab = sphere(-2.0, 1.0, 0.0, 2.0);

        let forward = merge_all(&[hull, wheel, cab]).unwrap();
        let backward = merge_all(&[cab, wheel, hull]).unwrap();
        assert_eq!(forward, hull);
        assert_eq!(backward, hull);
    }

    #[test]
    fn test_scaled_sphere() {
        let inputs = [sphere(-1.0, 0.0, 0.0, 1.0), sphere(1.0, 0.0, 0.0, 1.0)];
        let tightened = compute_scaled_sphere("cell", &inputs, 0.8).unwrap();
        assert_relative_eq!(tightened.radius, 1.6, epsilon = 1e-6);
        assert!(compute_scaled_sphere("cell", &[], 0.8).is_err());
    }
}
