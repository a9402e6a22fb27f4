//! Combat domain: the two attack combo variants.

use bevy::prelude::*;

/// One emitted attack within a three-hit chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    /// Opening hits, numbered 1 and 2
    Light(u8),
    Finisher,
}

impl AttackKind {
    /// Map a chain position (1-based) to its attack.
    pub fn from_step(step: u8) -> Option<Self> {
        match step {
            1 | 2 => Some(AttackKind::Light(step)),
            3 => Some(AttackKind::Finisher),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackKind::Light(n) => write!(f, "light {}", n),
            AttackKind::Finisher => write!(f, "finisher"),
        }
    }
}

/// Timestamp combo: each trigger advances the chain immediately, and a pause
/// longer than the reset window starts it over.
#[derive(Component, Debug, Default, Clone)]
pub struct ComboCounter {
    pub step: u8,
    pub last_attack_time: f32,
}

impl ComboCounter {
    pub fn trigger(&mut self, now: f32, reset_after: f32) -> Option<AttackKind> {
        if now - self.last_attack_time > reset_after {
            self.step = 0;
        }

        self.step += 1;
        self.last_attack_time = now;

        let attack = AttackKind::from_step(self.step);
        if !matches!(attack, Some(AttackKind::Light(_))) {
            self.step = 0;
        }
        attack
    }
}

/// Timed combo: one trigger plays the whole three-hit chain over time.
/// Triggers arriving mid-chain are dropped.
#[derive(Component, Debug, Default, Clone)]
pub struct ComboSequence {
    /// Hits already emitted; zero while idle
    emitted: u8,
    active: bool,
    time_to_next: f32,
}

impl ComboSequence {
    pub const HITS: u8 = 3;

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start the chain. Returns false if one is already playing.
    pub fn trigger(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.emitted = 0;
        self.time_to_next = 0.0;
        true
    }

    /// Advance by one frame, emitting at most one hit.
    pub fn advance(&mut self, dt: f32, step_delay: f32) -> Option<AttackKind> {
        if !self.active {
            return None;
        }

        self.time_to_next -= dt;
        if self.time_to_next > 0.0 {
            return None;
        }

        self.emitted += 1;
        self.time_to_next = step_delay;
        if self.emitted >= Self::HITS {
            self.active = false;
        }
        AttackKind::from_step(self.emitted)
    }
}
