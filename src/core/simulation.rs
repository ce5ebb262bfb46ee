use bevy::{
    ecs::resource::Resource,
    log::{debug, info},
};
use rand::Rng;

use crate::core::{
    agent::{Agent, random_population},
    config::{ConfigError, SimConfig},
    motion::advance,
    rng::{create_rng, tick_rng},
    steering::steer,
    trail_map::TrailMap,
};

const TICK_LOG_INTERVAL: u64 = 600;

/// Phase 1: blur and evaporate the whole map.
pub fn diffuse(trail: &mut TrailMap, rate: f32, evaporation: u8) {
    trail.diffuse(rate, evaporation);
}

/// Phase 2: steer and move every agent in order, sharing one stream.
/// Returns the number of agents that hit the grid boundary.
pub fn update_all_agents<R: Rng>(
    agents: &mut [Agent],
    trail: &TrailMap,
    rng: &mut R,
    config: &SimConfig,
) -> usize {
    let mut exits = 0;
    for agent in agents.iter_mut() {
        steer(agent, trail, rng, config);
        if advance(agent, rng, config) {
            exits += 1;
        }
    }
    exits
}

/// Phase 3: mark every agent's cell. Runs after all agents have moved.
pub fn deposit_all(agents: &[Agent], trail: &mut TrailMap, value: u8) {
    for agent in agents {
        trail.deposit(agent.position, value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub boundary_exits: usize,
}

/// Owns the trail map and the agent population and advances them tick by tick.
#[derive(Debug, Clone, Resource)]
pub struct Simulation {
    config: SimConfig,
    trail: TrailMap,
    agents: Vec<Agent>,
    tick: u64,
}

impl Simulation {
    /// Validates `config` and seeds a random population from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let agents = random_population(&mut rng, config.agent_count, config.width, config.height);
        info!(
            "Created simulation: {}x{} grid, {} agents, seed {}",
            config.width,
            config.height,
            agents.len(),
            config.seed
        );
        Ok(Self::from_parts(config, agents))
    }

    /// Starts from an explicit population instead of a random one.
    pub fn with_agents(config: SimConfig, agents: Vec<Agent>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, agents))
    }

    fn from_parts(config: SimConfig, agents: Vec<Agent>) -> Self {
        let trail = TrailMap::new(config.width, config.height);
        Self {
            config,
            trail,
            agents,
            tick: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn trail(&self) -> &TrailMap {
        &self.trail
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of ticks run so far, which is also the index of the next tick.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Runs one full diffuse, move, deposit cycle.
    pub fn step(&mut self) -> TickReport {
        let tick = self.tick;
        let mut rng = tick_rng(self.config.seed, tick);

        diffuse(
            &mut self.trail,
            self.config.diffuse_rate,
            self.config.evaporation_rate,
        );
        let boundary_exits =
            update_all_agents(&mut self.agents, &self.trail, &mut rng, &self.config);
        deposit_all(&self.agents, &mut self.trail, self.config.deposit_value);

        self.tick += 1;
        if tick % TICK_LOG_INTERVAL == 0 {
            debug!("tick {tick}: {boundary_exits} boundary exits");
        }
        TickReport {
            tick,
            boundary_exits,
        }
    }

    /// Runs `ticks` ticks and returns the report of the last one.
    pub fn run(&mut self, ticks: u64) -> Option<TickReport> {
        (0..ticks).map(|_| self.step()).last()
    }
}
