//! Core domain: camera setup and run start logging.

use bevy::prelude::*;

use crate::core::resources::RunConfig;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_run_start(run_config: Res<RunConfig>) {
    info!("Starting run with seed: {}", run_config.seed);
}
