//! Player vehicle ("fuel carrier")
//!
//! # Per-tick update
//!
//! 1. Turn input changes the yaw. Rotation has no collision consequence, so
//!    it always commits.
//! 2. With the movement gate open and move input held, the move cost is
//!    deducted. The cost is paid for trying, whether or not the move lands.
//! 3. If power is still above [`MIN_POWER_TO_MOVE`], a candidate position
//!    one step along the current heading is computed.
//! 4. The candidate is rejected if it leaves the square play area or if the
//!    vehicle's sphere placed there touches any obstacle. Otherwise the
//!    position commits and the sphere center follows it on X and Z.
//!
//! The yaw is never wrapped into `[0, 2π)`; only its sine and cosine are
//! ever used.

use super::{Obstacle, Spatial};
use crate::config::GameplayConfig;
use crate::controls::MovementIntent;
use crate::session::{PowerReserve, MIN_POWER_TO_MOVE};
use fuel_engine::foundation::math::{utils, Mat4, Vec3};
use fuel_engine::physics::{compute_scaled_sphere, BoundingSphere, CollisionError};
use fuel_engine::render::transforms;

/// Movement tuning for the vehicle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTuning {
    /// Yaw change per tick of turn input (radians)
    pub turn_speed: f32,
    /// Distance per tick of move input
    pub velocity: f32,
    /// Power charged per attempted move
    pub move_cost: f32,
    /// Bound on |x| and |z|
    pub max_range: f32,
}

impl From<&GameplayConfig> for VehicleTuning {
    fn from(config: &GameplayConfig) -> Self {
        Self {
            turn_speed: config.turn_speed,
            velocity: config.velocity,
            move_cost: config.move_cost,
            max_range: config.max_range,
        }
    }
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self::from(&GameplayConfig::default())
    }
}

/// Why a candidate position was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// |x| or |z| beyond the play area bound
    OutOfRange,
    /// Overlaps the obstacle at this index (first match)
    Obstacle {
        /// Index into the obstacle slice
        index: usize,
    },
}

/// Result of one vehicle update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No move attempted (no move input or movement gate closed)
    Idle,
    /// Move attempted and paid for, but too little power left to carry it out
    Stalled,
    /// Vehicle moved to this position
    Committed(Vec3),
    /// Candidate refused; the vehicle stays put
    Rejected(RejectReason),
}

/// Player-controlled vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    position: Vec3,
    forward_direction: f32,
    bounding_sphere: BoundingSphere,
    tuning: VehicleTuning,
}

impl Vehicle {
    /// Build the vehicle at the origin, facing +Z
    ///
    /// `bounding_factor` above 1 loosens the hitbox relative to the mesh.
    ///
    /// # Errors
    /// [`CollisionError::EmptyVolumeSet`] if `sub_volumes` is empty.
    pub fn new(
        sub_volumes: &[BoundingSphere],
        bounding_factor: f32,
        tuning: VehicleTuning,
    ) -> Result<Self, CollisionError> {
        let bounding_sphere = compute_scaled_sphere("fuel carrier", sub_volumes, bounding_factor)?;
        let mut vehicle = Self {
            position: Vec3::zeros(),
            forward_direction: 0.0,
            bounding_sphere,
            tuning,
        };
        vehicle.reset();
        Ok(vehicle)
    }

    /// Back to the origin, facing +Z
    pub fn reset(&mut self) {
        self.position = Vec3::zeros();
        self.forward_direction = 0.0;
        self.bounding_sphere = self.bounding_sphere.with_horizontal_center(self.position);
    }

    /// Yaw in radians, accumulated without wrapping
    pub fn forward_direction(&self) -> f32 {
        self.forward_direction
    }

    /// Play area bound on |x| and |z|
    pub fn max_range(&self) -> f32 {
        self.tuning.max_range
    }

    /// Movement tuning
    pub fn tuning(&self) -> &VehicleTuning {
        &self.tuning
    }

    /// Run one tick of turning and movement
    ///
    /// `can_move` is the session's movement gate and `power` the shared
    /// counter the move cost is charged to.
    pub fn update(
        &mut self,
        intent: MovementIntent,
        can_move: bool,
        power: &mut PowerReserve,
        obstacles: &[Obstacle],
    ) -> MoveOutcome {
        if intent.turn != 0 {
            self.forward_direction += f32::from(intent.turn) * self.tuning.turn_speed;
        }

        if !can_move || intent.movement == 0 {
            return MoveOutcome::Idle;
        }

        power.deduct(self.tuning.move_cost);
        if !power.can_fund_move() {
            log::trace!(
                "Move stalled: power {:.2} not above {}",
                power.current(),
                MIN_POWER_TO_MOVE
            );
            return MoveOutcome::Stalled;
        }

        let candidate = self.candidate_position(intent.movement);
        log::trace!("Candidate position {:?}", candidate);

        match self.check_movement(candidate, obstacles) {
            None => {
                self.position = candidate;
                self.bounding_sphere = self.bounding_sphere.with_horizontal_center(candidate);
                MoveOutcome::Committed(candidate)
            }
            Some(reason) => {
                log::debug!("Move to {:?} rejected: {:?}", candidate, reason);
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Position one step along the current heading
    ///
    /// `movement` is +1 for forward and -1 for back.
    pub fn candidate_position(&self, movement: i8) -> Vec3 {
        let local_step = Vec3::new(0.0, 0.0, f32::from(movement));
        self.position + utils::rotate_y(local_step, self.forward_direction) * self.tuning.velocity
    }

    /// Whether the vehicle may occupy `candidate`
    pub fn validate(&self, candidate: Vec3, obstacles: &[Obstacle]) -> bool {
        self.check_movement(candidate, obstacles).is_none()
    }

    /// First reason `candidate` is refused, if any
    pub fn check_movement(&self, candidate: Vec3, obstacles: &[Obstacle]) -> Option<RejectReason> {
        let range = self.tuning.max_range;
        if candidate.x.abs() > range || candidate.z.abs() > range {
            return Some(RejectReason::OutOfRange);
        }

        let future = self.bounding_sphere.with_horizontal_center(candidate);
        obstacles
            .iter()
            .position(|obstacle| future.intersects(obstacle.bounding_sphere()))
            .map(|index| RejectReason::Obstacle { index })
    }
}

impl Spatial for Vehicle {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    fn world_matrix(&self) -> Mat4 {
        transforms::yaw_translation(self.forward_direction, self.position)
    }
}
