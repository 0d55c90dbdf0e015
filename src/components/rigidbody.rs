//! Kinematic body component.
//!
//! Velocity is in pixels per 16 ms frame; movement systems multiply by the
//! frame's time scale before adding it to
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity plus the player-steering parameters.
///
/// Obstacles only use `velocity`. The player controller adds `acceleration`
/// per pressed arrow and damps with `friction ^ time_scale`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    pub velocity: Vector2,
    /// Velocity change per frame while an arrow key is held.
    pub acceleration: f32,
    /// Per-frame multiplicative damping, 1.0 means none.
    pub friction: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vector2::zero(),
            acceleration: 0.0,
            friction: 1.0,
        }
    }
}

impl RigidBody {
    /// Constant horizontal scroll, no steering.
    pub fn scrolling(speed_x: f32) -> Self {
        Self {
            velocity: Vector2 { x: speed_x, y: 0.0 },
            ..Default::default()
        }
    }

    pub fn steerable(acceleration: f32, friction: f32) -> Self {
        Self {
            velocity: Vector2::zero(),
            acceleration,
            friction,
        }
    }

    /// Apply friction for `time_scale` frames.
    pub fn damp(&mut self, time_scale: f32) {
        let factor = self.friction.powf(time_scale);
        self.velocity.x *= factor;
        self.velocity.y *= factor;
    }
}
