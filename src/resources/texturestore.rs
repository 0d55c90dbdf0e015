//! Frame textures per actor kind.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::sprite::SpriteKind;

pub const MAX_FRAMES: usize = 4;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<SpriteKind, ArrayVec<Texture2D, MAX_FRAMES>>,
    /// Full-window stage backdrop.
    pub background: Option<Texture2D>,
}

/// Backdrop image for a 1-based stage number.
pub fn background_path(stage: u8) -> String {
    format!("assets/backgrounds/stage{}_bg.png", stage)
}

impl TextureStore {
    /// Load every frame of `kind`. The first failing path aborts the load.
    pub fn load_frames(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        kind: SpriteKind,
        paths: &[&str],
    ) -> Result<(), String> {
        let mut frames = ArrayVec::new();
        for path in paths.iter().take(MAX_FRAMES) {
            let texture = rl
                .load_texture(th, path)
                .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
            frames.push(texture);
        }
        log::debug!("loaded {} frame(s) for {}", frames.len(), kind.name());
        self.map.insert(kind, frames);
        Ok(())
    }

    pub fn load_background(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| format!("Failed to load background '{}': {}", path, e))?;
        self.background = Some(texture);
        Ok(())
    }

    pub fn frame(&self, kind: SpriteKind, index: usize) -> Option<&Texture2D> {
        self.map.get(&kind).and_then(|frames| frames.get(index))
    }

    /// Size of the first frame, used as the sprite's collision size.
    pub fn frame_size(&self, kind: SpriteKind) -> Option<(f32, f32)> {
        self.frame(kind, 0)
            .map(|t| (t.width() as f32, t.height() as f32))
    }
}
