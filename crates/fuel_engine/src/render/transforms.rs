//! World transforms handed to the rendering collaborator
//!
//! The core never draws anything. It only produces the matrices a renderer
//! needs to place each mesh, plus a debug matrix that maps a unit sphere
//! mesh onto a bounding sphere.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::physics::BoundingSphere;

/// World matrix for an axis-aligned entity
pub fn translation(position: Vec3) -> Mat4 {
    Mat4::new_translation(&position)
}

/// World matrix for an entity turned by `yaw` about Y, then placed at `position`
pub fn yaw_translation(yaw: f32, position: Vec3) -> Mat4 {
    Mat4::new_translation(&position) * Mat4::rotation_y(yaw)
}

/// World matrix that maps a unit sphere mesh onto `sphere`
pub fn bounding_sphere_matrix(sphere: &BoundingSphere) -> Mat4 {
    Mat4::new_translation(&sphere.center) * Mat4::new_scaling(sphere.radius)
}
