use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::sprite::Sprite;

/// Precomputed axis-aligned bounds of a sprite, refreshed every frame by
/// [`update_sprite_boundaries`](crate::systems::collision::update_sprite_boundaries).
#[derive(Debug, Clone, Copy, PartialEq, Default, Component)]
pub struct Boundary {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Boundary {
    /// Bounds of a box of `width` x `height` scaled by `scale` and centred on `center`.
    /// Negative sizes are normalised so that `left <= right` and `top <= bottom`.
    pub fn from_center(center: Vector2, width: f32, height: f32, scale: f32) -> Self {
        let half_w = (width * scale / 2.0).abs();
        let half_h = (height * scale / 2.0).abs();
        Self {
            left: center.x - half_w,
            right: center.x + half_w,
            top: center.y - half_h,
            bottom: center.y + half_h,
        }
    }

    pub fn from_sprite(center: Vector2, sprite: &Sprite) -> Self {
        Self::from_center(center, sprite.width, sprite.height, sprite.scale)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict AABB overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// (x, y, w, h) of the top-left corner and size, as raylib draws rectangles.
    pub fn as_rect(&self) -> (f32, f32, f32, f32) {
        (self.left, self.top, self.width(), self.height())
    }
}
