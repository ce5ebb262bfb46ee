use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

pub const WIDTH: usize = 1200; // Grid width in cells
pub const HEIGHT: usize = 700; // Grid height in cells
pub const AGENTS: usize = 10_000;

pub const MOVE_SPEED: f32 = 1.0; // Cells per tick
pub const SENSE_ANGLE: f32 = FRAC_PI_8; // Side sensor offset, radians
pub const SENSE_SIZE: usize = 3; // Half-width of the sensor window
pub const SENSE_DISTANCE: f32 = 8.0;
pub const TURN_SPEED: f32 = FRAC_PI_4;
pub const STEER_RANDOM_SCALE: f32 = 5.0;

pub const DIFFUSE_RATE: f32 = 0.4;
pub const EVAPORATION_RATE: u8 = 0;

pub const DEPOSIT_VALUE: u8 = u8::MAX;
pub const BOUNDARY_EPSILON: f32 = 0.01; // Clamp margin on boundary exit

pub const INITIAL_SEED: u64 = 0;
pub const TICKS_PER_FRAME: u32 = 1;
