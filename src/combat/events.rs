//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::AttackKind;

/// Emitted for every attack an actor performs
#[derive(Debug)]
pub struct AttackPerformed {
    pub attacker: Entity,
    pub attack: AttackKind,
}

impl Message for AttackPerformed {}
