use bevy_ecs::prelude::Component;

/// Scrolling actor (enemy or pickup) that wraps back to the right edge once
/// it has left the screen on the left.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Obstacle;
