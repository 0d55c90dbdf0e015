use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an actor's centre, in pixels.
///
/// Boundaries, wrap checks and rendering all treat `pos` as the centre of the
/// scaled sprite.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
