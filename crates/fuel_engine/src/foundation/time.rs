//! Time management utilities
//!
//! The simulation is tick-driven: one update per frame. [`Timer`] is the
//! frame clock that produces the per-tick delta, either from wall time or
//! from a fixed step for headless and deterministic runs. [`Countdown`]
//! is a round clock advanced by those deltas.

use std::time::Instant;

/// How a [`Timer`] produces its delta time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Measure the wall-clock time between ticks
    RealTime,
    /// Report the same delta on every tick
    FixedStep(f32),
}

/// Frame clock driving the per-tick update
#[derive(Debug, Clone)]
pub struct Timer {
    mode: ClockMode,
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a wall-clock timer
    pub fn new() -> Self {
        Self::with_mode(ClockMode::RealTime)
    }

    /// Create a timer that advances by `step` seconds every tick
    pub fn fixed_step(step: f32) -> Self {
        Self::with_mode(ClockMode::FixedStep(step.max(0.0)))
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one frame (call once per tick)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = match self.mode {
            ClockMode::RealTime => now.duration_since(self.last_frame).as_secs_f32(),
            ClockMode::FixedStep(step) => step,
        };
        self.last_frame = now;
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Clock mode in use
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Countdown clock that expires once its remaining time reaches zero
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
}

impl Countdown {
    /// Create a countdown of `duration` seconds
    pub fn new(duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Consume `delta_time` seconds; returns true if this call made it expire
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if self.is_expired() {
            return false;
        }
        self.remaining = (self.remaining - delta_time.max(0.0)).max(0.0);
        self.is_expired()
    }

    /// Seconds left before expiry
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Whether the countdown has run out
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Restore the full duration
    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }
}
