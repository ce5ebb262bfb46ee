use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::core::motion::just_below;

/// A single trail-following particle.
///
/// `angle` is in radians and is never wrapped; only its sine and cosine matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub position: Vec2,
    pub angle: f32,
}

impl Agent {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Unit vector along the current heading.
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Uniformly random position in `[0, width) x [0, height)` and heading in `[0, 2π)`.
    pub fn random<R: Rng>(rng: &mut R, width: usize, height: usize) -> Self {
        let (width, height) = (width as f32, height as f32);
        let x = (rng.random::<f32>() * width).min(just_below(width));
        let y = (rng.random::<f32>() * height).min(just_below(height));
        let angle = rng.random::<f32>() * TAU;
        Self::new(Vec2::new(x, y), angle)
    }
}

/// Builds `count` agents, drawing x, y and heading per agent in order.
pub fn random_population<R: Rng>(
    rng: &mut R,
    count: usize,
    width: usize,
    height: usize,
) -> Vec<Agent> {
    (0..count)
        .map(|_| Agent::random(rng, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::create_rng;

    #[test]
    fn random_population_is_inside_grid() {
        let mut rng = create_rng(7);
        let agents = random_population(&mut rng, 500, 30, 20);
        assert_eq!(agents.len(), 500);
        for agent in &agents {
            assert!(agent.position.x >= 0.0 && agent.position.x < 30.0);
            assert!(agent.position.y >= 0.0 && agent.position.y < 20.0);
            assert!(agent.angle >= 0.0 && agent.angle < TAU);
        }
    }

    #[test]
    fn random_population_fits_wide_grid() {
        let mut rng = create_rng(1);
        for agent in random_population(&mut rng, 200, 20_000_000, 1) {
            assert!(agent.position.x < 20_000_000.0);
            assert!(agent.position.y < 1.0);
        }
    }

    #[test]
    fn random_population_is_reproducible() {
        let a = random_population(&mut create_rng(3), 50, 100, 100);
        let b = random_population(&mut create_rng(3), 50, 100, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn heading_points_along_angle() {
        let agent = Agent::new(Vec2::ZERO, std::f32::consts::FRAC_PI_2);
        let heading = agent.heading();
        assert!(heading.x.abs() < 1e-6);
        assert!((heading.y - 1.0).abs() < 1e-6);
    }
}
