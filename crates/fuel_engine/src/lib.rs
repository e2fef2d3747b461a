//! # Fuel Engine
//!
//! The headless spatial layer of a small 3D vehicle-collection game.
//!
//! ## Features
//!
//! - **Bounding Volumes**: one merged bounding sphere per multi-mesh model
//! - **Collision**: inclusive sphere-sphere overlap tests
//! - **Chase Camera**: view/projection derived from a followed pose
//! - **Input**: per-tick key state snapshot
//! - **Config**: TOML/RON configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use fuel_engine::prelude::*;
//!
//! let parts = [
//!     BoundingSphere::new(Vec3::new(-1.0, 0.5, 0.0), 1.0),
//!     BoundingSphere::new(Vec3::new(1.0, 0.5, 0.0), 1.0),
//! ];
//! let hitbox = compute_merged_sphere("carrier", &parts)?.scaled(1.2);
//! assert_eq!(hitbox.center.y, 0.0);
//!
//! let camera = ChaseCamera::default();
//! let matrices = camera.update(0.0, Vec3::zeros(), 16.0 / 9.0);
//! assert_eq!(matrices, camera.update(0.0, Vec3::zeros(), 16.0 / 9.0));
//! # Ok::<(), CollisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod physics;
pub mod render;
pub mod input;
pub mod config;

mod application;

pub use application::{run, AppError, Application};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        config::{Config, ConfigError, ConfigFormat},
        foundation::{
            math::{Mat4, Mat4Ext, Vec3},
            time::{Countdown, Timer},
        },
        input::{InputManager, KeyCode},
        physics::{compute_merged_sphere, compute_scaled_sphere, BoundingSphere, CollisionError},
        render::{transforms, CameraMatrices, ChaseCamera, ChaseCameraConfig},
    };
}
