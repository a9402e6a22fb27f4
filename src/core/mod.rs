//! Core domain: camera and run-wide configuration.

mod resources;
mod systems;

pub use resources::RunConfig;

use bevy::prelude::*;

use crate::core::systems::{log_run_start, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .add_systems(Startup, (setup_camera, log_run_start));
    }
}
