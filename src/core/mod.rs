pub mod agent;
pub mod config;
pub mod constants;
pub mod motion;
pub mod rng;
pub mod sensor;
pub mod simulation;
pub mod steering;
pub mod trail_map;
