//! Enemies domain: bounded back-and-forth patrol.

use bevy::prelude::*;

/// Horizontal oscillation around the position captured at spawn.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Patrol {
    pub start_x: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub speed: f32,
    pub half_range: f32,
}

impl Patrol {
    pub fn new(start_x: f32, speed: f32, half_range: f32) -> Self {
        Self {
            start_x,
            direction: 1.0,
            speed,
            half_range: half_range.max(0.0),
        }
    }

    /// Advance one tick from `x`, returning the new position.
    /// Reaching the bound clamps onto it and turns back toward the start.
    pub fn step(&mut self, x: f32, dt: f32) -> f32 {
        let next = x + self.speed * self.direction * dt;
        let offset = next - self.start_x;

        if offset.abs() >= self.half_range {
            let side = if offset >= 0.0 { 1.0 } else { -1.0 };
            self.direction = -side;
            return self.start_x + side * self.half_range;
        }
        next
    }
}
