//! Sprite component and the closed set of actor kinds.
//!
//! The renderer looks up textures by [`SpriteKind`] and draws frame
//! `current_frame` scaled by `scale` around the entity's
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;

/// Every kind of actor the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Buzz,
    Bee,
    Bat,
    Flame,
    Parrot,
    Ring,
    Life,
    GameOver,
}

impl SpriteKind {
    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Player => "sonic",
            SpriteKind::Buzz => "buzz",
            SpriteKind::Bee => "bee",
            SpriteKind::Bat => "bat",
            SpriteKind::Flame => "flame",
            SpriteKind::Parrot => "parrot",
            SpriteKind::Ring => "ring",
            SpriteKind::Life => "life",
            SpriteKind::GameOver => "game_over",
        }
    }

    /// True for the hostile kinds.
    pub fn is_enemy(&self) -> bool {
        matches!(
            self,
            SpriteKind::Buzz
                | SpriteKind::Bee
                | SpriteKind::Bat
                | SpriteKind::Flame
                | SpriteKind::Parrot
        )
    }
}

/// Unscaled frame size, scale factor and the frame currently shown.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub current_frame: usize,
}

impl Sprite {
    pub fn new(kind: SpriteKind, width: f32, height: f32) -> Self {
        Self {
            kind,
            width,
            height,
            scale: 1.0,
            current_frame: 0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_frame(mut self, frame: usize) -> Self {
        self.current_frame = frame;
        self
    }

    /// Size on screen after scaling.
    pub fn scaled_size(&self) -> (f32, f32) {
        (self.width * self.scale, self.height * self.scale)
    }

    /// Half of the scaled size, i.e. the distance from centre to edge.
    pub fn half_extents(&self) -> (f32, f32) {
        let (w, h) = self.scaled_size();
        (w / 2.0, h / 2.0)
    }
}
