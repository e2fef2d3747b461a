//! Math utilities and types
//!
//! Provides the nalgebra aliases and the handful of matrix builders the
//! game core needs: yaw rotation, right-handed look-at and perspective.

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Rotate a vector about the world Y axis by `yaw` radians.
    ///
    /// Positive yaw turns +Z towards +X, so a yaw of zero leaves the local
    /// forward axis (+Z) unchanged and a quarter turn maps it onto +X.
    pub fn rotate_y(v: Vec3, yaw: f32) -> Vec3 {
        let (sin, cos) = yaw.sin_cos();
        Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
    }

    /// Distance between two points ignoring the Y component
    pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
        let dx = a.x - b.x;
        let dz = a.z - b.z;
        dx.hypot(dz)
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a right-handed perspective projection with a `[0, 1]` depth range
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_y(angle: f32) -> Mat4 {
        let (sin, cos) = angle.sin_cos();
        Mat4::new(
            cos, 0.0, sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // P = [xs  0   0          0         ]
        //     [0   ys  0          0         ]
        //     [0   0   f/(n-f)    nf/(n-f)  ]
        //     [0   0   -1         0         ]
        let y_scale = 1.0 / (fov_y * 0.5).tan();
        let x_scale = y_scale / aspect;
        let depth = near - far;

        let mut result = Mat4::zeros();
        result[(0, 0)] = x_scale;
        result[(1, 1)] = y_scale;
        result[(2, 2)] = far / depth;
        result[(2, 3)] = near * far / depth;
        result[(3, 2)] = -1.0;
        result
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(&up).normalize();
        let camera_up = right.cross(&forward);

        let translation = Mat4::new(
            1.0, 0.0, 0.0, -eye.x,
            0.0, 1.0, 0.0, -eye.y,
            0.0, 0.0, 1.0, -eye.z,
            0.0, 0.0, 0.0, 1.0,
        );

        let rotation = Mat4::new(
            right.x, right.y, right.z, 0.0,
            camera_up.x, camera_up.y, camera_up.z, 0.0,
            -forward.x, -forward.y, -forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotate_y_zero_is_identity() {
        let v = Vec3::new(1.5, 2.0, -3.0);
        assert_eq!(utils::rotate_y(v, 0.0), v);
    }

    #[test]
    fn test_rotate_y_quarter_turn_maps_forward_to_x() {
        let rotated = utils::rotate_y(Vec3::new(0.0, 0.0, 1.0), constants::PI / 2.0);
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_matrix_matches_rotate_y() {
        let yaw = 0.7;
        let v = Vec3::new(3.0, 1.0, -2.0);
        let by_matrix = Mat4::rotation_y(yaw).transform_vector(&v);
        let by_helper = utils::rotate_y(v, yaw);
        assert_relative_eq!(by_matrix, by_helper, epsilon = 1e-5);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(3.0, -4.0, 4.0);
        assert_relative_eq!(utils::horizontal_distance(a, b), 5.0);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 7.0, -15.0);
        let view = Mat4::look_at(eye, Vec3::new(0.0, 5.0, 0.0), Vec3::y());
        let eye_in_view = view.transform_point(&nalgebra::Point3::from(eye));
        assert_relative_eq!(eye_in_view.coords, Vec3::zeros(), epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_target_is_in_front() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, -10.0), Vec3::zeros(), Vec3::y());
        let target = view.transform_point(&nalgebra::Point3::origin());
        // Right-handed view space looks down -Z
        assert!(target.z < 0.0);
        assert_relative_eq!(target.z, -10.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_maps_clip_planes_to_depth_range() {
        let near = 1.0;
        let far = 2000.0;
        let projection = Mat4::perspective(utils::deg_to_rad(45.0), 16.0 / 9.0, near, far);

        let near_point = projection * Vec4::new(0.0, 0.0, -near, 1.0);
        let far_point = projection * Vec4::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(near_point.z / near_point.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far_point.z / far_point.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_perspective_aspect_scales_x() {
        let square = Mat4::perspective(1.0, 1.0, 1.0, 100.0);
        let wide = Mat4::perspective(1.0, 2.0, 1.0, 100.0);
        assert_relative_eq!(wide[(0, 0)] * 2.0, square[(0, 0)], epsilon = 1e-6);
        assert_relative_eq!(wide[(1, 1)], square[(1, 1)]);
    }
}
