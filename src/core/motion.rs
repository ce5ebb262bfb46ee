use std::f32::consts::TAU;

use rand::Rng;

use crate::core::{agent::Agent, config::SimConfig};

/// Largest `f32` strictly below a positive `limit`.
pub fn just_below(limit: f32) -> f32 {
    f32::from_bits(limit.to_bits() - 1)
}

/// Clamps into `[0, limit - epsilon]`, and strictly below `limit` even where
/// `limit - epsilon` rounds back to `limit`.
fn clamp_inside(value: f32, limit: f32, epsilon: f32) -> f32 {
    value.max(0.0).min(limit - epsilon).min(just_below(limit))
}

/// Moves the agent one step along its heading.
///
/// Leaving the grid (the far edge itself included) clamps the position back
/// inside and picks a fresh random heading. That is the only case that draws
/// from `rng`. Returns `true` on a boundary exit.
pub fn advance<R: Rng>(agent: &mut Agent, rng: &mut R, config: &SimConfig) -> bool {
    let width = config.width as f32;
    let height = config.height as f32;
    let mut next = agent.position + agent.heading() * config.move_speed;

    let exited = next.x < 0.0 || next.x >= width || next.y < 0.0 || next.y >= height;
    if exited {
        next.x = clamp_inside(next.x, width, config.boundary_epsilon);
        next.y = clamp_inside(next.y, height, config.boundary_epsilon);
        agent.angle = rng.random::<f32>() * TAU;
    }

    agent.position = next;
    exited
}
