use bevy::{log::LogPlugin, prelude::*};

use crate::{
    core::{config::SimConfig, simulation::Simulation},
    game::SlimePlugin,
};

pub mod core;
pub mod game;

fn main() -> AppExit {
    let config = SimConfig::default();
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Physarum".into(),
                    resolution: (config.width as f32, config.height as f32).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,physarum_sim=debug".into(),
                ..default()
            }),
    );

    // Logging is up once DefaultPlugins is added, so config errors get reported.
    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("Invalid simulation config: {err}");
            return AppExit::error();
        }
    };

    app.insert_resource(simulation).add_plugins(SlimePlugin);
    app.run()
}
