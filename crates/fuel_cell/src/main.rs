//! Headless Fuel Cell demo
//!
//! Plays one round with a scripted driver: full throttle, steering in a
//! slow weave. Pass a `.toml` or `.ron` config path as the first argument.

use fuel_cell::{BoundInput, ControlBindings, GameConfig, GameState, Level, LevelMeshes};
use fuel_engine::foundation::logging;
use fuel_engine::foundation::time::Timer;
use fuel_engine::input::InputManager;
use fuel_engine::{AppError, Application};

const ASPECT_RATIO: f32 = 16.0 / 9.0;
const TICK_RATE: f32 = 60.0;

struct FuelCellApp {
    level: Level,
    bindings: ControlBindings,
    pickups: usize,
}

impl FuelCellApp {
    fn new(config: &GameConfig, bindings: ControlBindings) -> Result<Self, AppError> {
        let level = Level::new(config, &LevelMeshes::stock())
            .map_err(|err| AppError::GameLogic(err.to_string()))?;
        Ok(Self {
            level,
            bindings,
            pickups: 0,
        })
    }
}

impl Application for FuelCellApp {
    fn initialize(&mut self) -> Result<(), AppError> {
        self.level.start();
        Ok(())
    }

    fn update(&mut self, input: &InputManager, delta_time: f32) -> Result<(), AppError> {
        let controls = BoundInput::new(input, &self.bindings);
        let report = self.level.tick(&controls, delta_time, ASPECT_RATIO);
        if report.picked_up > 0 {
            self.pickups += report.picked_up;
            log::info!(
                "Picked up fuel cell ({} of {})",
                self.pickups,
                self.level.collectibles().len()
            );
        }
        Ok(())
    }

    fn should_exit(&self) -> bool {
        matches!(self.level.session().state(), GameState::Won | GameState::Lost)
    }

    fn cleanup(&mut self) {
        let session = self.level.session();
        log::info!(
            "Round over: {:?}, score {}, power {:.1}, vehicle at {:?}",
            session.state(),
            session.score(),
            session.power().current(),
            fuel_cell::Spatial::position(self.level.vehicle())
        );
    }
}

fn main() -> Result<(), AppError> {
    let path = std::env::args().nth(1);
    let loaded = path.as_deref().map(GameConfig::load_validated);
    let (config, load_error) = match loaded {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (GameConfig::default(), Some(err)),
        None => (GameConfig::default(), None),
    };

    if let Err(err) = logging::init_with_level(&config.engine_log_level) {
        eprintln!("Logger already installed: {err}");
    }
    if let (Some(path), Some(err)) = (&path, &load_error) {
        log::warn!("Using default game config ({}): {}", path, err);
    }

    let bindings = ControlBindings::from_config(&config.controls)?;
    let mut app = FuelCellApp::new(&config, bindings)?;
    let mut timer = Timer::fixed_step(1.0 / TICK_RATE);
    let mut input = InputManager::new();

    // Round time plus a second of slack
    let max_frames = ((config.gameplay.round_time + 1.0) * TICK_RATE) as u64;
    let frames = fuel_engine::run(&mut app, &mut timer, &mut input, max_frames, |frame, input| {
        input.handle_key_input(bindings.forward, true);
        // Steer left for one second out of every three
        input.handle_key_input(bindings.turn_left, frame % 180 < 60);
    })?;

    log::info!("Simulated {} ticks ({:.1}s)", frames, timer.total_time());
    Ok(())
}
