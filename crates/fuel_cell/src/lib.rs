//! # Fuel Cell
//!
//! Game core of a small 3D collection game: drive a carrier around a square
//! field, avoid the barriers, pick up every fuel cell before the clock runs
//! out.
//!
//! The crate is headless. Each [`Level::tick`] consumes a control snapshot
//! and produces the committed vehicle pose, pickups and camera matrices;
//! drawing them is left to whoever owns the window.
//!
//! ```rust
//! use fuel_cell::{Controls, GameConfig, GameState, Level, LevelMeshes};
//!
//! let mut config = GameConfig::default();
//! config.level.seed = Some(1);
//!
//! let mut level = Level::new(&config, &LevelMeshes::stock())?;
//! level.start();
//! let report = level.tick(&Controls::FORWARD, 1.0 / 60.0, 16.0 / 9.0);
//! assert_eq!(report.state, GameState::Running);
//! # Ok::<(), fuel_cell::GameError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controls;
pub mod entities;
pub mod error;
pub mod level;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use controls::{BoundInput, ControlBindings, ControlSource, Controls, MovementIntent};
pub use entities::{Collectible, MoveOutcome, Obstacle, RejectReason, Spatial, Vehicle};
pub use error::{GameError, GameResult, LevelError};
pub use level::{Level, LevelMeshes, RenderItem, RenderKind, TickReport};
pub use session::{GameState, PowerReserve, Session};
