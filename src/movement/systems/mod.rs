//! Movement domain: system modules for locomotion updates.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use animation::update_animation_params;
pub(crate) use collisions::detect_ground;
pub(crate) use input::{read_input, sample_input};
pub(crate) use movement::{apply_motion, update_facing};
