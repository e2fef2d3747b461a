//! Session state shared with the vehicle
//!
//! The session owns the movement gate, the power counter, the round clock
//! and the score. The vehicle never reaches into it on its own: the level
//! hands the gate and a `&mut PowerReserve` to each vehicle update.

use crate::config::GameplayConfig;
use fuel_engine::foundation::time::Countdown;

/// Power a move attempt must leave behind for the move to go ahead
pub const MIN_POWER_TO_MOVE: f32 = 1.0;

/// Shared depletable power counter
///
/// No floor is applied: the counter may go below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerReserve {
    current: f32,
}

impl PowerReserve {
    /// Create a reserve holding `amount`
    pub fn new(amount: f32) -> Self {
        Self { current: amount }
    }

    /// Power left
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Subtract `cost`
    pub fn deduct(&mut self, cost: f32) {
        self.current -= cost;
    }

    /// Add `amount`
    pub fn recharge(&mut self, amount: f32) {
        self.current += amount;
    }

    /// Whether enough power remains for a move to be carried out
    pub fn can_fund_move(&self) -> bool {
        self.current > MIN_POWER_TO_MOVE
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the round to begin
    Start,
    /// Round in progress
    Running,
    /// Every collectible retrieved in time
    Won,
    /// Round clock ran out
    Lost,
}

/// Per-session game state
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    can_move: bool,
    power: PowerReserve,
    starting_power: f32,
    clock: Countdown,
    retrieved: usize,
}

impl Session {
    /// Create a session waiting to start
    pub fn new(config: &GameplayConfig) -> Self {
        Self {
            state: GameState::Start,
            can_move: true,
            power: PowerReserve::new(config.starting_power),
            starting_power: config.starting_power,
            clock: Countdown::new(config.round_time),
            retrieved: 0,
        }
    }

    /// Begin the round
    pub fn start(&mut self) {
        if self.state == GameState::Start {
            self.state = GameState::Running;
            log::info!(
                "Round started: {:.1}s on the clock, power {:.1}",
                self.clock.remaining(),
                self.power.current()
            );
        }
    }

    /// Return to the start state with full power and a fresh clock
    pub fn reset(&mut self) {
        self.state = GameState::Start;
        self.power = PowerReserve::new(self.starting_power);
        self.clock.reset();
        self.retrieved = 0;
        log::info!("Session reset");
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the round is in progress
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// External movement gate
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Open or close the movement gate
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    /// Power counter
    pub fn power(&self) -> &PowerReserve {
        &self.power
    }

    /// Mutable power counter, handed to the vehicle update
    pub fn power_mut(&mut self) -> &mut PowerReserve {
        &mut self.power
    }

    /// Seconds left in the round
    pub fn time_remaining(&self) -> f32 {
        self.clock.remaining()
    }

    /// Collectibles retrieved so far
    pub fn score(&self) -> usize {
        self.retrieved
    }

    /// Record `count` newly retrieved collectibles
    pub fn record_retrieved(&mut self, count: usize) {
        self.retrieved += count;
    }

    /// Advance the round clock and settle the outcome
    ///
    /// `remaining` is the number of collectibles still out in the field.
    pub fn advance(&mut self, delta_time: f32, remaining: usize) {
        if !self.is_running() {
            return;
        }
        if remaining == 0 {
            self.state = GameState::Won;
            log::info!("Round won with {:.1}s left", self.clock.remaining());
        } else if self.clock.advance(delta_time) {
            self.state = GameState::Lost;
            log::info!("Round lost: {} collectibles left", remaining);
        }
    }
}
