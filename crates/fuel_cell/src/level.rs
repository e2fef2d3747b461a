//! Level: one vehicle, its obstacles and collectibles, and the session
//!
//! [`Level::tick`] runs one simulation step in a fixed order:
//!
//! 1. Resolve the movement intent from the control snapshot
//! 2. Update the vehicle (turn, pay, validate, commit)
//! 3. Scan collectibles not yet retrieved against the vehicle's sphere
//! 4. Advance the session clock and settle win/loss
//! 5. Derive the chase camera from the committed vehicle pose
//!
//! Steps 2 to 4 only run while the session is [`GameState::Running`].

use crate::config::{GameConfig, LevelConfig};
use crate::controls::{ControlSource, MovementIntent};
use crate::entities::{Collectible, MoveOutcome, Obstacle, Spatial, Vehicle, VehicleTuning};
use crate::error::{GameResult, LevelError};
use crate::session::{GameState, Session};
use fuel_engine::foundation::math::{utils, Mat4, Vec3};
use fuel_engine::physics::BoundingSphere;
use fuel_engine::render::{CameraMatrices, ChaseCamera};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sub-mesh bounding spheres for every model the level uses
#[derive(Debug, Clone, Default)]
pub struct LevelMeshes {
    /// Vehicle model
    pub vehicle: Vec<BoundingSphere>,
    /// Fuel cell model
    pub collectible: Vec<BoundingSphere>,
    /// Obstacle models, by kind label. Placed obstacles cycle through them.
    pub obstacles: Vec<(String, Vec<BoundingSphere>)>,
}

impl LevelMeshes {
    /// Stand-in volumes for the stock models
    ///
    /// Roughly the sizes of the shipped carrier, fuel cell and the three
    /// barrier meshes, for running without an asset pipeline.
    pub fn stock() -> Self {
        Self {
            vehicle: vec![
                BoundingSphere::new(Vec3::new(0.0, 1.0, 1.2), 1.5),
                BoundingSphere::new(Vec3::new(0.0, 1.0, -1.2), 1.5),
            ],
            collectible: vec![BoundingSphere::new(Vec3::new(0.0, 1.5, 0.0), 1.5)],
            obstacles: vec![
                ("cube".to_string(), vec![BoundingSphere::new(Vec3::new(0.0, 2.5, 0.0), 4.3)]),
                (
                    "cylinder".to_string(),
                    vec![
                        BoundingSphere::new(Vec3::new(0.0, 1.5, 0.0), 2.5),
                        BoundingSphere::new(Vec3::new(0.0, 4.5, 0.0), 2.5),
                    ],
                ),
                ("pyramid".to_string(), vec![BoundingSphere::new(Vec3::new(0.0, 2.0, 0.0), 3.5)]),
            ],
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Intent resolved from the controls
    pub intent: MovementIntent,
    /// Vehicle update result ([`MoveOutcome::Idle`] outside a running round)
    pub outcome: MoveOutcome,
    /// Collectibles picked up this tick
    pub picked_up: usize,
    /// Camera derived from the committed pose
    pub camera: CameraMatrices,
    /// Session state after the tick
    pub state: GameState,
}

/// What a render item shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind<'a> {
    /// The player vehicle
    Vehicle,
    /// A fuel cell still in the field
    Collectible,
    /// An obstacle with its asset label
    Obstacle(&'a str),
}

/// One entity handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem<'a> {
    /// Asset selector
    pub kind: RenderKind<'a>,
    /// World matrix
    pub world: Mat4,
    /// Unit-sphere debug matrix for the bounding volume
    pub bounds: Mat4,
}

impl<'a> RenderItem<'a> {
    fn of(kind: RenderKind<'a>, entity: &impl Spatial) -> Self {
        Self {
            kind,
            world: entity.world_matrix(),
            bounds: entity.bounding_sphere_matrix(),
        }
    }
}

/// Where layouts come from on reset
#[derive(Debug, Clone)]
enum Layout {
    Random {
        rng: StdRng,
        config: LevelConfig,
        collectible: Collectible,
        obstacles: Vec<Obstacle>,
    },
    Fixed {
        collectibles: Vec<Collectible>,
        obstacles: Vec<Obstacle>,
    },
}

impl Layout {
    fn roll(&mut self) -> Result<(Vec<Collectible>, Vec<Obstacle>), LevelError> {
        match self {
            Self::Random {
                rng,
                config,
                collectible,
                obstacles,
            } => {
                if obstacles.is_empty() && config.obstacle_count > 0 {
                    return Err(LevelError::NoObstacleMeshes);
                }
                let mut taken = Vec::with_capacity(config.collectible_count + config.obstacle_count);

                let mut placed_collectibles = Vec::with_capacity(config.collectible_count);
                for _ in 0..config.collectible_count {
                    let spot = random_spot(rng, config, &taken, "fuel cell")?;
                    taken.push(spot);
                    placed_collectibles.push(collectible.clone().placed_at(spot));
                }

                let mut placed_obstacles = Vec::with_capacity(config.obstacle_count);
                for (template, _) in obstacles.iter().cycle().zip(0..config.obstacle_count) {
                    let spot = random_spot(rng, config, &taken, "barrier")?;
                    taken.push(spot);
                    placed_obstacles.push(template.clone().placed_at(spot));
                }

                Ok((placed_collectibles, placed_obstacles))
            }
            Self::Fixed {
                collectibles,
                obstacles,
            } => Ok((collectibles.clone(), obstacles.clone())),
        }
    }
}

/// Draw a free horizontal spot
///
/// Each of |x| and |z| lies in `[min_distance, max_distance]` with a random
/// sign. The spot must keep `spacing` from every taken spot and from the
/// vehicle spawn at the origin.
fn random_spot(
    rng: &mut impl Rng,
    config: &LevelConfig,
    taken: &[Vec3],
    kind: &'static str,
) -> Result<Vec3, LevelError> {
    for _ in 0..config.placement_attempts {
        let spot = Vec3::new(random_coordinate(rng, config), 0.0, random_coordinate(rng, config));
        let clear = std::iter::once(Vec3::zeros())
            .chain(taken.iter().copied())
            .all(|other| utils::horizontal_distance(spot, other) >= config.spacing);
        if clear {
            return Ok(spot);
        }
    }
    Err(LevelError::PlacementExhausted {
        kind,
        attempts: config.placement_attempts,
    })
}

fn random_coordinate(rng: &mut impl Rng, config: &LevelConfig) -> f32 {
    let magnitude = rng.gen_range(config.min_distance..=config.max_distance);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// A playable level
#[derive(Debug, Clone)]
pub struct Level {
    vehicle: Vehicle,
    collectibles: Vec<Collectible>,
    obstacles: Vec<Obstacle>,
    session: Session,
    camera: ChaseCamera,
    layout: Layout,
}

impl Level {
    /// Build a randomly laid out level
    ///
    /// The layout is reproducible when `config.level.seed` is set.
    ///
    /// # Errors
    /// - [`GameError::Config`](crate::GameError::Config) if `config` fails validation
    /// - [`GameError::Collision`](crate::GameError::Collision) if a mesh has no sub-volumes
    /// - [`GameError::Level`](crate::GameError::Level) if placement runs out of attempts
    pub fn new(config: &GameConfig, meshes: &LevelMeshes) -> GameResult<Self> {
        config.validate()?;
        let bounding = &config.bounding;

        let vehicle = Vehicle::new(
            &meshes.vehicle,
            bounding.vehicle_factor,
            VehicleTuning::from(&config.gameplay),
        )?;
        let collectible = Collectible::new(&meshes.collectible, bounding.collectible_factor)?;
        let obstacles = meshes
            .obstacles
            .iter()
            .map(|(kind, volumes)| Obstacle::new(kind.as_str(), volumes, bounding.obstacle_factor))
            .collect::<Result<Vec<_>, _>>()?;

        let rng = match config.level.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layout = Layout::Random {
            rng,
            config: config.level.clone(),
            collectible,
            obstacles,
        };
        Self::with_layout(config, vehicle, layout)
    }

    /// Build a level with hand-placed entities
    ///
    /// Resets restore exactly this layout.
    ///
    /// # Errors
    /// [`GameError::Config`](crate::GameError::Config) if `config` fails validation.
    pub fn with_entities(
        config: &GameConfig,
        vehicle: Vehicle,
        collectibles: Vec<Collectible>,
        obstacles: Vec<Obstacle>,
    ) -> GameResult<Self> {
        config.validate()?;
        let layout = Layout::Fixed {
            collectibles,
            obstacles,
        };
        Self::with_layout(config, vehicle, layout)
    }

    fn with_layout(config: &GameConfig, vehicle: Vehicle, mut layout: Layout) -> GameResult<Self> {
        let (collectibles, obstacles) = layout.roll()?;
        log::info!(
            "Level ready: {} fuel cells, {} barriers",
            collectibles.len(),
            obstacles.len()
        );
        Ok(Self {
            vehicle,
            collectibles,
            obstacles,
            session: Session::new(&config.gameplay),
            camera: ChaseCamera::new(config.camera.clone()),
            layout,
        })
    }

    /// Begin the round
    pub fn start(&mut self) {
        self.session.start();
    }

    /// Start a new session: vehicle home, fresh layout, full power, new clock
    ///
    /// # Errors
    /// [`GameError::Level`](crate::GameError::Level) if the new layout can't be placed.
    pub fn reset(&mut self) -> GameResult<()> {
        let (collectibles, obstacles) = self.layout.roll()?;
        self.collectibles = collectibles;
        self.obstacles = obstacles;
        self.vehicle.reset();
        self.session.reset();
        Ok(())
    }

    /// Run one simulation step
    pub fn tick(
        &mut self,
        controls: &impl ControlSource,
        delta_time: f32,
        aspect_ratio: f32,
    ) -> TickReport {
        let intent = MovementIntent::from_source(controls);
        let mut outcome = MoveOutcome::Idle;
        let mut picked_up = 0;

        if self.session.is_running() {
            let can_move = self.session.can_move();
            outcome = self
                .vehicle
                .update(intent, can_move, self.session.power_mut(), &self.obstacles);

            let vehicle_volume = *self.vehicle.bounding_sphere();
            for collectible in self.collectibles.iter_mut().filter(|c| !c.is_retrieved()) {
                if collectible.update_pickup(&vehicle_volume) {
                    picked_up += 1;
                }
            }

            self.session.record_retrieved(picked_up);
            let remaining = self.remaining_collectibles();
            self.session.advance(delta_time, remaining);
        }

        let camera = self.camera.update(
            self.vehicle.forward_direction(),
            self.vehicle.position(),
            aspect_ratio,
        );

        TickReport {
            intent,
            outcome,
            picked_up,
            camera,
            state: self.session.state(),
        }
    }

    /// Everything to draw this frame
    ///
    /// Retrieved collectibles are left out.
    pub fn render_items(&self) -> Vec<RenderItem<'_>> {
        let mut items = Vec::with_capacity(1 + self.collectibles.len() + self.obstacles.len());
        items.push(RenderItem::of(RenderKind::Vehicle, &self.vehicle));
        items.extend(
            self.collectibles
                .iter()
                .filter(|c| !c.is_retrieved())
                .map(|c| RenderItem::of(RenderKind::Collectible, c)),
        );
        items.extend(
            self.obstacles
                .iter()
                .map(|o| RenderItem::of(RenderKind::Obstacle(o.kind()), o)),
        );
        items
    }

    /// Collectibles still in the field
    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.is_retrieved()).count()
    }

    /// Player vehicle
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// All collectibles, retrieved or not
    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    /// All obstacles
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session, for the movement gate and recharges
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Chase camera
    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Controls;
    use crate::error::GameError;

    fn seeded_config(seed: u64) -> GameConfig {
        let mut config = GameConfig::default();
        config.level.seed = Some(seed);
        config
    }

    #[test]
    fn test_random_layout_respects_bounds_and_spacing() {
        let config = seeded_config(7);
        let level = Level::new(&config, &LevelMeshes::stock()).unwrap();
        assert_eq!(level.collectibles().len(), config.level.collectible_count);
        assert_eq!(level.obstacles().len(), config.level.obstacle_count);

        let spots: Vec<Vec3> = level
            .collectibles()
            .iter()
            .map(Spatial::position)
            .chain(level.obstacles().iter().map(Spatial::position))
            .collect();
        for (i, spot) in spots.iter().enumerate() {
            assert_eq!(spot.y, 0.0);
            for axis in [spot.x, spot.z] {
                assert!(axis.abs() >= config.level.min_distance);
                assert!(axis.abs() <= config.level.max_distance);
            }
            assert!(utils::horizontal_distance(*spot, Vec3::zeros()) >= config.level.spacing);
            for other in &spots[i + 1..] {
                assert!(utils::horizontal_distance(*spot, *other) >= config.level.spacing);
            }
        }
    }

    #[test]
    fn test_obstacle_kinds_rotate() {
        let level = Level::new(&seeded_config(3), &LevelMeshes::stock()).unwrap();
        let kinds: Vec<&str> = level.obstacles().iter().take(4).map(Obstacle::kind).collect();
        assert_eq!(kinds, ["cube", "cylinder", "pyramid", "cube"]);
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let a = Level::new(&seeded_config(42), &LevelMeshes::stock()).unwrap();
        let b = Level::new(&seeded_config(42), &LevelMeshes::stock()).unwrap();
        assert_eq!(a.collectibles(), b.collectibles());
        assert_eq!(a.obstacles(), b.obstacles());
    }

    #[test]
    fn test_placement_exhausted() {
        let mut config = seeded_config(1);
        config.level.collectible_count = 2;
        config.level.obstacle_count = 0;
        config.level.min_distance = 10.0;
        config.level.max_distance = 10.0;
        config.level.spacing = 50.0;
        config.level.placement_attempts = 20;

        let err = Level::new(&config, &LevelMeshes::stock()).unwrap_err();
        assert!(matches!(
            err,
            GameError::Level(LevelError::PlacementExhausted {
                kind: "fuel cell",
                attempts: 20
            })
        ));
    }

    #[test]
    fn test_missing_meshes_rejected() {
        let config = seeded_config(1);
        let no_obstacles = LevelMeshes {
            obstacles: Vec::new(),
            ..LevelMeshes::stock()
        };
        assert!(matches!(
            Level::new(&config, &no_obstacles).unwrap_err(),
            GameError::Level(LevelError::NoObstacleMeshes)
        ));

        let no_vehicle = LevelMeshes {
            vehicle: Vec::new(),
            ..LevelMeshes::stock()
        };
        assert!(matches!(
            Level::new(&config, &no_vehicle).unwrap_err(),
            GameError::Collision(_)
        ));
    }

    #[test]
    fn test_non_finite_layout_rejected_before_placement() {
        let mut config = seeded_config(1);
        config.level.min_distance = f32::NAN;
        assert!(matches!(
            Level::new(&config, &LevelMeshes::stock()).unwrap_err(),
            GameError::Config(_)
        ));

        let mut config = seeded_config(1);
        config.level.max_distance = f32::INFINITY;
        assert!(matches!(
            Level::new(&config, &LevelMeshes::stock()).unwrap_err(),
            GameError::Config(_)
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = seeded_config(1);
        config.gameplay.velocity = 0.0;
        assert!(matches!(
            Level::new(&config, &LevelMeshes::stock()).unwrap_err(),
            GameError::Config(_)
        ));
    }

    #[test]
    fn test_tick_before_start_only_moves_camera() {
        let mut level = Level::new(&seeded_config(5), &LevelMeshes::stock()).unwrap();
        let report = level.tick(&Controls::FORWARD, 1.0 / 60.0, 1.5);

        assert_eq!(report.outcome, MoveOutcome::Idle);
        assert_eq!(report.state, GameState::Start);
        assert_eq!(level.vehicle().position(), Vec3::zeros());
        assert_eq!(level.session().power().current(), config_power());
        assert_eq!(report.camera, level.camera().update(0.0, Vec3::zeros(), 1.5));
    }

    fn config_power() -> f32 {
        GameConfig::default().gameplay.starting_power
    }

    #[test]
    fn test_reset_rolls_new_session() {
        let mut level = Level::new(&seeded_config(9), &LevelMeshes::stock()).unwrap();
        let first_layout = level.collectibles().to_vec();
        level.start();
        for _ in 0..10 {
            level.tick(&(Controls::FORWARD | Controls::TURN_LEFT), 0.1, 1.0);
        }
        assert_ne!(level.vehicle().position(), Vec3::zeros());

        level.reset().unwrap();
        assert_eq!(level.session().state(), GameState::Start);
        assert_eq!(level.vehicle().position(), Vec3::zeros());
        assert_eq!(level.vehicle().forward_direction(), 0.0);
        assert_eq!(level.session().power().current(), config_power());
        assert!(level.collectibles().iter().all(|c| !c.is_retrieved()));
        assert_ne!(level.collectibles(), first_layout.as_slice());
    }

    #[test]
    fn test_render_items_skip_retrieved() {
        let config = GameConfig::default();
        let unit = [BoundingSphere::new(Vec3::zeros(), 1.0)];
        let vehicle = Vehicle::new(&unit, 1.0, VehicleTuning::default()).unwrap();
        let near = Collectible::new(&unit, 1.0).unwrap().placed_at(Vec3::new(0.0, 0.0, 1.0));
        let far = Collectible::new(&unit, 1.0).unwrap().placed_at(Vec3::new(40.0, 0.0, 40.0));
        let wall = Obstacle::new("cube", &unit, 1.0)
            .unwrap()
            .placed_at(Vec3::new(-40.0, 0.0, 40.0));

        let mut level = Level::with_entities(&config, vehicle, vec![near, far], vec![wall]).unwrap();
        assert_eq!(level.render_items().len(), 4);

        level.start();
        let report = level.tick(&Controls::empty(), 0.1, 1.0);
        assert_eq!(report.picked_up, 1);

        let items = level.render_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].kind, RenderKind::Vehicle);
        assert_eq!(items[1].kind, RenderKind::Collectible);
        assert_eq!(items[1].world[(0, 3)], 40.0);
        assert_eq!(items[2].kind, RenderKind::Obstacle("cube"));
    }
}
