//! Window size resource.
//!
//! Motion clamping, obstacle wrapping and the game-over banner all read the
//! playfield size from here.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
