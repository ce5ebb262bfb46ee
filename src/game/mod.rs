use bevy::prelude::*;

use crate::game::render::trail_texture::{setup_trail_texture, upload_trail_texture};

pub mod render;
pub mod tick;

/// Drives the `Simulation` resource: one or more ticks per frame, then a
/// redraw of the trail texture. The resource must be inserted before `run`.
pub struct SlimePlugin;

impl Plugin for SlimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_trail_texture)
            .add_systems(
                Update,
                (tick::step_simulation, upload_trail_texture).chain(),
            )
            .add_systems(Update, (tick::exit_on_escape, tick::log_quit));
    }
}
