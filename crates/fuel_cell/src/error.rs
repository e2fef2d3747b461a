//! Game error types

use fuel_engine::config::ConfigError;
use fuel_engine::physics::CollisionError;
use thiserror::Error;

/// Errors raised while building or resetting a level
#[derive(Error, Debug)]
pub enum GameError {
    /// An entity could not get a bounding volume
    #[error("Entity setup failed: {0}")]
    Collision(#[from] CollisionError),

    /// Configuration could not be used
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    /// Layout generation failed
    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Layout generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Random placement ran out of attempts
    #[error("Could not find a free spot for {kind} after {attempts} attempts")]
    PlacementExhausted {
        /// Kind of entity being placed
        kind: &'static str,
        /// Draws made before giving up
        attempts: u32,
    },

    /// No obstacle mesh was supplied to pick obstacle kinds from
    #[error("Level needs at least one obstacle mesh")]
    NoObstacleMeshes,
}

/// Result type alias for all game operations
pub type GameResult<T> = Result<T, GameError>;
