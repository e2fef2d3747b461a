//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::foundation::time::Timer;
use crate::input::InputManager;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a game with the engine's frame clock and
/// input state. The engine is headless: presenting frames is the job of an
/// external renderer.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first update. Use this to set up your initial
    /// game state.
    fn initialize(&mut self) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every tick with the input snapshot for that tick.
    ///
    /// # Arguments
    /// * `input` - Keys held during this tick
    /// * `delta_time` - Time since last tick in seconds
    fn update(&mut self, input: &InputManager, delta_time: f32) -> Result<(), AppError>;

    /// Whether the application wants the loop to stop
    fn should_exit(&self) -> bool {
        false
    }

    /// Cleanup the application
    fn cleanup(&mut self);
}

/// Drive `app` for at most `max_frames` ticks
///
/// `feed_input` is called before each tick to update the key state; the
/// loop stops early once [`Application::should_exit`] returns true.
/// Returns the number of ticks run.
///
/// # Errors
/// The first error returned by `initialize` or `update`; `cleanup` still runs.
pub fn run<A, F>(
    app: &mut A,
    timer: &mut Timer,
    input: &mut InputManager,
    max_frames: u64,
    mut feed_input: F,
) -> Result<u64, AppError>
where
    A: Application,
    F: FnMut(u64, &mut InputManager),
{
    app.initialize()?;

    let mut frames = 0;
    let result = loop {
        if frames >= max_frames || app.should_exit() {
            break Ok(frames);
        }
        feed_input(frames, input);
        let delta_time = timer.tick();
        if let Err(err) = app.update(input, delta_time) {
            log::error!("Update failed on frame {}: {}", frames, err);
            break Err(err);
        }
        frames += 1;
    };

    app.cleanup();
    result
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
