use glam::Vec2;

use crate::core::{agent::Agent, trail_map::TrailMap};

/// Where a sensor at `angle_offset` from the agent's heading samples the map.
pub fn probe_point(agent: &Agent, angle_offset: f32, distance: f32) -> Vec2 {
    agent.position + Vec2::from_angle(agent.angle + angle_offset) * distance
}

/// Raw trail sum of the sensor window in front of `agent`.
///
/// The window is centered on the truncated probe point. Windows hanging over
/// the grid edge read less, nothing is renormalized.
pub fn sense(
    agent: &Agent,
    trail: &TrailMap,
    angle_offset: f32,
    distance: f32,
    sensor_size: usize,
) -> u32 {
    let probe = probe_point(agent, angle_offset, distance);
    trail.window_sum(probe.x as i64, probe.y as i64, sensor_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn probe_lies_at_sense_distance() {
        let agent = Agent::new(Vec2::new(10.0, 10.0), 0.0);
        let probe = probe_point(&agent, 0.0, 8.0);
        assert!((probe - Vec2::new(18.0, 10.0)).length() < 1e-5);

        let rotated = probe_point(&agent, FRAC_PI_2, 8.0);
        assert!((rotated - Vec2::new(10.0, 18.0)).length() < 1e-4);
    }

    #[test]
    fn sense_sums_window_around_probe() {
        let mut trail = TrailMap::new(32, 32);
        trail.set(18, 10, 200);
        trail.set(19, 11, 50);
        // outside the half-width 1 window around (18, 10)
        trail.set(21, 10, 255);
        let agent = Agent::new(Vec2::new(10.5, 10.5), 0.0);
        assert_eq!(sense(&agent, &trail, 0.0, 8.0, 1), 250);
    }

    #[test]
    fn sense_reads_raw_sum_not_average() {
        let mut trail = TrailMap::new(16, 16);
        trail.as_mut_slice().fill(10);
        let centered = Agent::new(Vec2::new(4.0, 8.0), 0.0);
        // probe at (8, 8), full 7x7 window in grid
        assert_eq!(sense(&centered, &trail, 0.0, 4.0, 3), 49 * 10);

        let edge = Agent::new(Vec2::new(0.0, 0.0), std::f32::consts::PI);
        // probe at (-5, 0): the window spans x in -8..=-2, entirely off grid
        assert_eq!(sense(&edge, &trail, 0.0, 5.0, 3), 0);

        let corner = Agent::new(Vec2::new(0.5, 0.5), 0.0);
        // probe at (0, 0): only the 4x4 in-grid quarter of the window counts
        assert_eq!(sense(&corner, &trail, 0.0, 0.0, 3), 16 * 10);
    }

    #[test]
    fn sense_off_grid_reads_zero() {
        let trail = TrailMap::new(8, 8);
        let agent = Agent::new(Vec2::new(4.0, 4.0), 0.0);
        assert_eq!(sense(&agent, &trail, 0.0, 100.0, 3), 0);
    }
}
