//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashState {
    #[default]
    Inactive,
    Active { remaining: f32 },
}

impl DashState {
    pub fn is_active(&self) -> bool {
        matches!(self, DashState::Active { .. })
    }
}

/// Coarse vertical state used to drive jump/fall animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirState {
    #[default]
    Grounded,
    Rising,
    Falling,
}

/// Animation parameters published for the sprite animator.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimatorParams {
    pub speed: f32,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub is_dashing: bool,
}
