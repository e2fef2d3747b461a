//! Input management system
//!
//! Tracks which keys are held. The windowing layer (external to this crate)
//! feeds key transitions in; game code reads a per-tick snapshot through
//! [`InputManager::is_key_pressed`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input manager
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    pressed: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.pressed.insert(key) {
                log::trace!("Key down: {}", key);
            }
        } else if self.pressed.remove(&key) {
            log::trace!("Key up: {}", key);
        }
    }

    /// Whether `key` is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Release every key (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Every supported key
    pub const ALL: [KeyCode; 11] = [
        KeyCode::A,
        KeyCode::D,
        KeyCode::S,
        KeyCode::W,
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
    ];

    /// Name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::A => "A",
            KeyCode::D => "D",
            KeyCode::S => "S",
            KeyCode::W => "W",
            KeyCode::Space => "Space",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized key name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown key name: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputManager::new();
        assert!(!input.is_key_pressed(KeyCode::W));

        input.handle_key_input(KeyCode::W, true);
        input.handle_key_input(KeyCode::A, true);
        assert!(input.is_key_pressed(KeyCode::W));
        assert_eq!(input.pressed_count(), 2);

        input.handle_key_input(KeyCode::W, false);
        assert!(!input.is_key_pressed(KeyCode::W));
        assert!(input.is_key_pressed(KeyCode::A));
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        input.handle_key_input(KeyCode::Space, true);
        assert_eq!(input.pressed_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        input.handle_key_input(KeyCode::Up, true);
        input.clear();
        assert_eq!(input.pressed_count(), 0);
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in KeyCode::ALL {
            assert_eq!(key.name().parse::<KeyCode>(), Ok(key));
        }
        assert_eq!("escape".parse::<KeyCode>(), Ok(KeyCode::Escape));
        assert_eq!(
            "F13".parse::<KeyCode>(),
            Err(UnknownKey("F13".to_string()))
        );
    }
}
