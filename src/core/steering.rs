use bevy::log::trace;
use rand::Rng;

use crate::core::{agent::Agent, config::SimConfig, sensor::sense, trail_map::TrailMap};

/// Outcome of comparing the forward, left and right sensor readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Forward is strictly the strongest.
    Straight,
    /// Forward is strictly the weakest, turn by a signed random amount.
    Random,
    Right,
    Left,
    /// Exact tie not covered above, keep heading.
    Tie,
}

impl Turn {
    /// First match wins, in this order.
    pub fn decide(forward: u32, left: u32, right: u32) -> Self {
        if forward > left && forward > right {
            Turn::Straight
        } else if forward < left && forward < right {
            Turn::Random
        } else if right > left {
            Turn::Right
        } else if left > right {
            Turn::Left
        } else {
            Turn::Tie
        }
    }

    /// Heading change for this decision.
    pub fn angle_delta(self, steer_magnitude: f32, turn_strength: f32) -> f32 {
        match self {
            Turn::Straight | Turn::Tie => 0.0,
            Turn::Random => (steer_magnitude - 0.5) * 2.0 * turn_strength,
            Turn::Right => steer_magnitude * turn_strength,
            Turn::Left => -steer_magnitude * turn_strength,
        }
    }
}

/// Samples the three sensors and turns the agent.
///
/// Always draws exactly two values from `rng`, whatever the decision.
pub fn steer<R: Rng>(
    agent: &mut Agent,
    trail: &TrailMap,
    rng: &mut R,
    config: &SimConfig,
) -> Turn {
    let turn_strength = rng.random::<f32>() * config.turn_speed;
    let steer_magnitude = rng.random::<f32>() * config.steer_random_scale;

    let size = config.sense_size;
    let distance = config.sense_distance;
    let forward = sense(agent, trail, 0.0, distance, size);
    let left = sense(agent, trail, -config.sense_angle, distance, size);
    let right = sense(agent, trail, config.sense_angle, distance, size);

    let turn = Turn::decide(forward, left, right);
    agent.angle += turn.angle_delta(steer_magnitude, turn_strength);
    trace!("steer f={forward} l={left} r={right} -> {turn:?}");
    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{rng::create_rng, sensor::probe_point};
    use glam::Vec2;

    #[test]
    fn decision_order() {
        assert_eq!(Turn::decide(10, 5, 5), Turn::Straight);
        assert_eq!(Turn::decide(1, 5, 7), Turn::Random);
        assert_eq!(Turn::decide(5, 3, 8), Turn::Right);
        assert_eq!(Turn::decide(5, 8, 3), Turn::Left);
        // forward ties with the stronger side
        assert_eq!(Turn::decide(8, 8, 3), Turn::Left);
        assert_eq!(Turn::decide(8, 3, 8), Turn::Right);
    }

    #[test]
    fn exact_ties_keep_heading() {
        assert_eq!(Turn::decide(0, 0, 0), Turn::Tie);
        assert_eq!(Turn::decide(4, 9, 9), Turn::Random);
        assert_eq!(Turn::decide(9, 4, 4), Turn::Straight);
        assert_eq!(Turn::decide(9, 9, 9), Turn::Tie);
        assert_eq!(Turn::Tie.angle_delta(4.0, 0.5), 0.0);
    }

    #[test]
    fn angle_deltas() {
        assert_eq!(Turn::Straight.angle_delta(3.0, 0.5), 0.0);
        assert_eq!(Turn::Right.angle_delta(3.0, 0.5), 1.5);
        assert_eq!(Turn::Left.angle_delta(3.0, 0.5), -1.5);
        assert_eq!(Turn::Random.angle_delta(3.0, 0.5), 2.5);
        assert_eq!(Turn::Random.angle_delta(0.0, 0.5), -0.5);
    }

    fn small_config() -> SimConfig {
        SimConfig {
            width: 64,
            height: 64,
            agent_count: 1,
            ..SimConfig::default()
        }
    }

    #[test]
    fn empty_map_leaves_heading_unchanged() {
        let config = small_config();
        let trail = TrailMap::new(config.width, config.height);
        let mut agent = Agent::new(Vec2::new(32.0, 32.0), 1.25);
        let turn = steer(&mut agent, &trail, &mut create_rng(1), &config);
        assert_eq!(turn, Turn::Tie);
        assert_eq!(agent.angle, 1.25);
    }

    #[test]
    fn turns_towards_trail_on_the_right() {
        let config = small_config();
        let mut trail = TrailMap::new(config.width, config.height);
        let mut agent = Agent::new(Vec2::new(20.5, 32.5), 0.0);
        let right = probe_point(&agent, config.sense_angle, config.sense_distance);
        trail.set(right.x as i64 + 3, right.y as i64 + 3, 255);

        let mut rng = create_rng(9);
        let turn = steer(&mut agent, &trail, &mut rng, &config);
        assert_eq!(turn, Turn::Right);
        assert!(agent.angle >= 0.0);
    }

    #[test]
    fn consumes_two_draws_regardless_of_branch() {
        let config = small_config();
        let empty = TrailMap::new(config.width, config.height);
        let mut full = TrailMap::new(config.width, config.height);
        full.as_mut_slice().fill(255);
        let mut marked = TrailMap::new(config.width, config.height);
        marked.set(40, 32, 255);

        for trail in [&empty, &full, &marked] {
            let mut rng = create_rng(5);
            let mut agent = Agent::new(Vec2::new(32.0, 32.0), 0.0);
            steer(&mut agent, trail, &mut rng, &config);

            let mut reference = create_rng(5);
            let _: f32 = reference.random();
            let _: f32 = reference.random();
            assert_eq!(rng.random::<u64>(), reference.random::<u64>());
        }
    }
}
