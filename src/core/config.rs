use thiserror::Error;

use crate::core::constants::{
    AGENTS, BOUNDARY_EPSILON, DEPOSIT_VALUE, DIFFUSE_RATE, EVAPORATION_RATE, HEIGHT,
    INITIAL_SEED, MOVE_SPEED, SENSE_ANGLE, SENSE_DISTANCE, SENSE_SIZE, STEER_RANDOM_SCALE,
    TICKS_PER_FRAME, TURN_SPEED, WIDTH,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} cells overflows the cell index")]
    GridTooLarge { width: usize, height: usize },

    #[error("diffuse rate must be within [0, 1], got {0}")]
    InvalidDiffuseRate(f32),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("sense size {size} exceeds the largest grid dimension {limit}")]
    SensorTooLarge { size: usize, limit: usize },

    #[error("ticks per frame must be at least 1")]
    NoTicksPerFrame,
}

/// Tunable parameters of the simulation. `Default` matches the compile-time constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub agent_count: usize,
    pub move_speed: f32,
    pub sense_angle: f32,
    pub sense_size: usize,
    pub sense_distance: f32,
    pub turn_speed: f32,
    pub steer_random_scale: f32,
    pub diffuse_rate: f32,
    pub evaporation_rate: u8,
    pub deposit_value: u8,
    pub boundary_epsilon: f32,
    pub seed: u64,
    pub ticks_per_frame: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            agent_count: AGENTS,
            move_speed: MOVE_SPEED,
            sense_angle: SENSE_ANGLE,
            sense_size: SENSE_SIZE,
            sense_distance: SENSE_DISTANCE,
            turn_speed: TURN_SPEED,
            steer_random_scale: STEER_RANDOM_SCALE,
            diffuse_rate: DIFFUSE_RATE,
            evaporation_rate: EVAPORATION_RATE,
            deposit_value: DEPOSIT_VALUE,
            boundary_epsilon: BOUNDARY_EPSILON,
            seed: INITIAL_SEED,
            ticks_per_frame: TICKS_PER_FRAME,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.diffuse_rate) {
            // NaN fails the range check too
            return Err(ConfigError::InvalidDiffuseRate(self.diffuse_rate));
        }
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("sense_angle", self.sense_angle),
            ("sense_distance", self.sense_distance),
            ("turn_speed", self.turn_speed),
            ("steer_random_scale", self.steer_random_scale),
            ("boundary_epsilon", self.boundary_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if self.boundary_epsilon <= 0.0 || self.boundary_epsilon > 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "boundary_epsilon",
                value: self.boundary_epsilon,
            });
        }
        let limit = self.width.max(self.height);
        if self.sense_size > limit {
            return Err(ConfigError::SensorTooLarge {
                size: self.sense_size,
                limit,
            });
        }
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::NoTicksPerFrame);
        }
        Ok(())
    }
}
