//! # 3D Camera System
//!
//! Provides a generic look-at [`Camera`] and the [`ChaseCamera`] that
//! follows the player vehicle.
//!
//! ## Design Principles
//! - **Library-agnostic**: No graphics API dependencies in camera math
//! - **Immutable operation**: Matrix getters never modify camera state
//! - **No smoothing**: The chase camera snaps to the followed pose every tick

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use serde::{Deserialize, Serialize};

/// 3D Camera for perspective projections
///
/// Represents a camera in 3D space with position, look-at target and
/// projection parameters.
///
/// # Coordinate System
/// Uses a right-handed Y-up coordinate system; view space looks down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera with standard Y-up orientation
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Configure camera to look at a specific point with custom up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Generate view matrix for world-to-camera space transformation
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate perspective projection matrix
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// View and projection matrices produced for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// World-to-view transform
    pub view: Mat4,
    /// View-to-clip transform
    pub projection: Mat4,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }
}

/// Chase camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Vertical field of view in degrees
    pub view_angle: f32,
    /// Near clipping plane distance
    pub near_clip: f32,
    /// Far clipping plane distance
    pub far_clip: f32,
    /// Eye position in the followed entity's local frame (behind and above)
    pub eye_offset: Vec3,
    /// Look-at point in the followed entity's local frame
    pub target_offset: Vec3,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            view_angle: 45.0,
            near_clip: 1.0,
            far_clip: 2000.0,
            eye_offset: Vec3::new(0.0, 7.0, -15.0),
            target_offset: Vec3::new(0.0, 5.0, 0.0),
        }
    }
}

/// Camera that trails a followed entity
///
/// Holds only fixed settings. Every call to [`ChaseCamera::update`] derives
/// the matrices from the followed pose alone, so identical inputs always
/// give identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseCamera {
    config: ChaseCameraConfig,
}

impl ChaseCamera {
    /// Create a chase camera from its settings
    pub fn new(config: ChaseCameraConfig) -> Self {
        Self { config }
    }

    /// Camera settings
    pub fn config(&self) -> &ChaseCameraConfig {
        &self.config
    }

    /// Eye and look-at points for a followed pose
    pub fn eye_and_target(&self, yaw: f32, position: Vec3) -> (Vec3, Vec3) {
        let eye = position + utils::rotate_y(self.config.eye_offset, yaw);
        let target = position + utils::rotate_y(self.config.target_offset, yaw);
        (eye, target)
    }

    /// Derive view and projection for the followed entity's yaw and position
    pub fn update(&self, yaw: f32, position: Vec3, aspect_ratio: f32) -> CameraMatrices {
        let (eye, target) = self.eye_and_target(yaw, position);

        let mut camera = Camera::perspective(
            eye,
            self.config.view_angle,
            aspect_ratio,
            self.config.near_clip,
            self.config.far_clip,
        );
        camera.look_at(target, Vec3::y());

        CameraMatrices {
            view: camera.get_view_matrix(),
            projection: camera.get_projection_matrix(),
        }
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new(ChaseCameraConfig::default())
    }
}
