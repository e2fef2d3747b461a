//! # Rendering Interface
//!
//! The engine core does not draw. This module holds the camera math and the
//! world transforms that an external renderer consumes opaquely:
//!
//! - **Camera**: generic look-at camera and the vehicle chase camera
//! - **Transforms**: per-entity world matrices and the bounding-sphere debug matrix

pub mod camera;
pub mod transforms;

pub use camera::{Camera, CameraMatrices, ChaseCamera, ChaseCameraConfig};
