//! Logical controls and per-tick movement intent
//!
//! The game reads four logical controls. Any type that can answer "is this
//! control active right now" can drive the vehicle: a raw [`Controls`]
//! snapshot, or the engine's [`InputManager`] seen through key bindings.

use crate::config::ControlsConfig;
use bitflags::bitflags;
use fuel_engine::config::ConfigError;
use fuel_engine::input::{InputManager, KeyCode};

bitflags! {
    /// Set of logical controls held during a tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        /// Turn counter-clockwise (towards +X when facing +Z)
        const TURN_LEFT = 1 << 0;
        /// Turn clockwise
        const TURN_RIGHT = 1 << 1;
        /// Drive forward
        const FORWARD = 1 << 2;
        /// Drive backward
        const BACK = 1 << 3;
    }
}

/// Per-tick input snapshot
pub trait ControlSource {
    /// Whether `control` is held this tick
    fn is_active(&self, control: Controls) -> bool;
}

impl ControlSource for Controls {
    fn is_active(&self, control: Controls) -> bool {
        self.contains(control)
    }
}

/// Key bindings for the four logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBindings {
    /// Key for [`Controls::TURN_LEFT`]
    pub turn_left: KeyCode,
    /// Key for [`Controls::TURN_RIGHT`]
    pub turn_right: KeyCode,
    /// Key for [`Controls::FORWARD`]
    pub forward: KeyCode,
    /// Key for [`Controls::BACK`]
    pub back: KeyCode,
}

impl ControlBindings {
    /// Build bindings from the key names in the configuration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for an unknown key name.
    pub fn from_config(config: &ControlsConfig) -> Result<Self, ConfigError> {
        let [turn_left, turn_right, forward, back] = config.resolve()?;
        Ok(Self {
            turn_left,
            turn_right,
            forward,
            back,
        })
    }

    /// Snapshot the bound controls from the current key state
    pub fn snapshot(&self, input: &InputManager) -> Controls {
        let mut controls = Controls::empty();
        controls.set(Controls::TURN_LEFT, input.is_key_pressed(self.turn_left));
        controls.set(Controls::TURN_RIGHT, input.is_key_pressed(self.turn_right));
        controls.set(Controls::FORWARD, input.is_key_pressed(self.forward));
        controls.set(Controls::BACK, input.is_key_pressed(self.back));
        controls
    }
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            turn_left: KeyCode::A,
            turn_right: KeyCode::D,
            forward: KeyCode::W,
            back: KeyCode::S,
        }
    }
}

/// Key state read through a set of bindings
pub struct BoundInput<'a> {
    input: &'a InputManager,
    bindings: &'a ControlBindings,
}

impl<'a> BoundInput<'a> {
    /// View `input` through `bindings`
    pub fn new(input: &'a InputManager, bindings: &'a ControlBindings) -> Self {
        Self { input, bindings }
    }
}

impl ControlSource for BoundInput<'_> {
    fn is_active(&self, control: Controls) -> bool {
        self.bindings.snapshot(self.input).contains(control)
    }
}

/// Signed per-axis intent resolved from the controls
///
/// Each axis is -1, 0 or +1. When both directions of an axis are held,
/// left wins over right and forward wins over back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementIntent {
    /// +1 turn left, -1 turn right
    pub turn: i8,
    /// +1 forward, -1 back
    pub movement: i8,
}

impl MovementIntent {
    /// Resolve the intent from a control snapshot
    pub fn from_source(source: &impl ControlSource) -> Self {
        let turn = if source.is_active(Controls::TURN_LEFT) {
            1
        } else if source.is_active(Controls::TURN_RIGHT) {
            -1
        } else {
            0
        };
        let movement = if source.is_active(Controls::FORWARD) {
            1
        } else if source.is_active(Controls::BACK) {
            -1
        } else {
            0
        };
        Self { turn, movement }
    }

    /// No turning and no movement
    pub fn is_idle(self) -> bool {
        self.turn == 0 && self.movement == 0
    }
}
