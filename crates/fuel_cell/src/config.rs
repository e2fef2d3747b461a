//! Game configuration
//!
//! Every tuning constant of the game lives here. Files may be partial:
//! missing fields fall back to the defaults below.

use fuel_engine::config::{Config, ConfigError};
use fuel_engine::input::KeyCode;
use fuel_engine::render::ChaseCameraConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Default log filter for the binary (overridden by `RUST_LOG`)
    pub engine_log_level: String,

    /// Movement and round settings
    pub gameplay: GameplayConfig,

    /// Hitbox scaling per entity kind
    pub bounding: BoundingConfig,

    /// Chase camera settings
    pub camera: ChaseCameraConfig,

    /// Layout generation settings
    pub level: LevelConfig,

    /// Key bindings
    pub controls: ControlsConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Yaw change per tick of held turn input (radians)
    pub turn_speed: f32,

    /// Distance covered per tick of held move input
    pub velocity: f32,

    /// Power deducted for every tick a move is attempted
    pub move_cost: f32,

    /// Power at the start of a session
    pub starting_power: f32,

    /// Bound on |x| and |z| of the vehicle position
    pub max_range: f32,

    /// Round length in seconds
    pub round_time: f32,
}

/// Bounding sphere scale factors relative to the visual mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingConfig {
    /// Collectible pickup sensitivity (below 1 tightens)
    pub collectible_factor: f32,

    /// Obstacle hitbox scale
    pub obstacle_factor: f32,

    /// Vehicle hitbox scale (above 1 loosens)
    pub vehicle_factor: f32,
}

/// Layout generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Number of collectibles placed per session
    pub collectible_count: usize,

    /// Number of obstacles placed per session
    pub obstacle_count: usize,

    /// Smallest |x| / |z| of a placed entity
    pub min_distance: f32,

    /// Largest |x| / |z| of a placed entity
    pub max_distance: f32,

    /// Minimum horizontal gap between placed entities and the spawn point
    pub spacing: f32,

    /// Random draws allowed per entity before placement gives up
    pub placement_attempts: u32,

    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn left key
    pub turn_left_key: String,

    /// Turn right key
    pub turn_right_key: String,

    /// Forward key
    pub forward_key: String,

    /// Back key
    pub back_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine_log_level: "info".to_string(),
            gameplay: GameplayConfig::default(),
            bounding: BoundingConfig::default(),
            camera: ChaseCameraConfig::default(),
            level: LevelConfig::default(),
            controls: ControlsConfig::default(),
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            turn_speed: 0.025,
            velocity: 0.75,
            move_cost: 0.1,
            starting_power: 100.0,
            max_range: 98.0,
            round_time: 30.0,
        }
    }
}

impl Default for BoundingConfig {
    fn default() -> Self {
        Self {
            collectible_factor: 0.8,
            obstacle_factor: 0.7,
            vehicle_factor: 1.2,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            collectible_count: 12,
            obstacle_count: 40,
            min_distance: 10.0,
            max_distance: 90.0,
            spacing: 15.0,
            placement_attempts: 1000,
            seed: None,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            turn_left_key: "A".to_string(),
            turn_right_key: "D".to_string(),
            forward_key: "W".to_string(),
            back_key: "S".to_string(),
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path` and validate it
    ///
    /// # Errors
    /// Any [`ConfigError`] from reading, parsing or [`GameConfig::validate`].
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or the defaults if it can't be used
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_validated(path) {
            Ok(config) => {
                log::info!("Loaded game config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Using default game config ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Check every value the simulation relies on
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        let gameplay = &self.gameplay;
        positive("gameplay.turn_speed", gameplay.turn_speed)?;
        positive("gameplay.velocity", gameplay.velocity)?;
        positive("gameplay.max_range", gameplay.max_range)?;
        positive("gameplay.round_time", gameplay.round_time)?;
        if gameplay.move_cost < 0.0 || !gameplay.move_cost.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "gameplay.move_cost must be finite and not negative, got {}",
                gameplay.move_cost
            )));
        }
        if !gameplay.starting_power.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "gameplay.starting_power must be finite, got {}",
                gameplay.starting_power
            )));
        }

        positive("bounding.collectible_factor", self.bounding.collectible_factor)?;
        positive("bounding.obstacle_factor", self.bounding.obstacle_factor)?;
        positive("bounding.vehicle_factor", self.bounding.vehicle_factor)?;

        let camera = &self.camera;
        positive("camera.view_angle", camera.view_angle)?;
        positive("camera.near_clip", camera.near_clip)?;
        if !camera.far_clip.is_finite() || camera.near_clip >= camera.far_clip {
            return Err(ConfigError::Invalid(format!(
                "camera.near_clip ({}) must be less than camera.far_clip ({})",
                camera.near_clip, camera.far_clip
            )));
        }
        if camera.eye_offset == camera.target_offset {
            return Err(ConfigError::Invalid(
                "camera.eye_offset and camera.target_offset must differ".to_string(),
            ));
        }

        let level = &self.level;
        if !level.max_distance.is_finite()
            || !(0.0..=level.max_distance).contains(&level.min_distance)
        {
            return Err(ConfigError::Invalid(format!(
                "level distances must satisfy 0 <= min ({}) <= max ({})",
                level.min_distance, level.max_distance
            )));
        }
        if level.max_distance > gameplay.max_range {
            return Err(ConfigError::Invalid(format!(
                "level.max_distance ({}) exceeds gameplay.max_range ({})",
                level.max_distance, gameplay.max_range
            )));
        }

        if level.spacing < 0.0 || !level.spacing.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "level.spacing must be finite and not negative, got {}",
                level.spacing
            )));
        }

        self.controls.resolve()?;
        Ok(())
    }
}

impl ControlsConfig {
    /// Parse the key names into `[turn_left, turn_right, forward, back]`
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for an unknown key name.
    pub fn resolve(&self) -> Result<[KeyCode; 4], ConfigError> {
        let parse = |name: &str| {
            name.parse::<KeyCode>()
                .map_err(|err| ConfigError::Invalid(err.to_string()))
        };
        Ok([
            parse(&self.turn_left_key)?,
            parse(&self.turn_right_key)?,
            parse(&self.forward_key)?,
            parse(&self.back_key)?,
        ])
    }
}
