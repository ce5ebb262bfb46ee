use bevy::{prelude::*, window::WindowCloseRequested};

use crate::core::simulation::Simulation;

/// Runs `ticks_per_frame` ticks of the simulation.
pub fn step_simulation(mut simulation: ResMut<Simulation>) {
    for _ in 0..simulation.config().ticks_per_frame {
        simulation.step();
    }
}

pub fn exit_on_escape(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    simulation: Res<Simulation>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        info!("Quit after {} ticks", simulation.tick());
        exit.write(AppExit::Success);
    }
}

// Closing the window already stops the app, this only reports it.
pub fn log_quit(
    mut close_requests: EventReader<WindowCloseRequested>,
    simulation: Res<Simulation>,
) {
    for _ in close_requests.read() {
        info!("Quit after {} ticks", simulation.tick());
    }
}
