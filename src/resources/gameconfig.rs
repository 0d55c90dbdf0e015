//! Game configuration resource.
//!
//! Settings loaded from an INI file. Missing files or keys keep the defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1500
//! height = 800
//! target_fps = 60
//!
//! [audio]
//! volume = 64
//! muted = false
//!
//! [game]
//! game_over_speed = 2.0
//! stage = 3
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::gameover::GAME_OVER_SPEED;

const DEFAULT_WINDOW_WIDTH: u32 = 1500;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const MIN_WINDOW_WIDTH: u32 = 320;
const MIN_WINDOW_HEIGHT: u32 = 240;
const MAX_WINDOW_SIDE: u32 = 16384;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VOLUME: u8 = 64;
const MAX_VOLUME: u8 = 128;
const DEFAULT_STAGE: u8 = 3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Master volume, 0..=128.
    pub volume: u8,
    pub muted: bool,
    /// Banner speed in pixels per 16 ms frame.
    pub game_over_speed: f32,
    /// Stage whose soundtrack plays, 1..=3.
    pub stage: u8,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            volume: DEFAULT_VOLUME,
            muted: false,
            game_over_speed: GAME_OVER_SPEED,
            stage: DEFAULT_STAGE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Out of range values are
    /// clamped.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, volume={}, muted={}, stage={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.volume,
            self.muted,
            self.stage
        );

        Ok(())
    }

    /// Parse settings from INI text. Used by tests and by `load_from_file`.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window]
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = clamp_side(width, MIN_WINDOW_WIDTH);
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = clamp_side(height, MIN_WINDOW_HEIGHT);
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = u32::try_from(fps).unwrap_or(u32::MAX);
        }

        // [audio]
        if let Some(volume) = config.getuint("audio", "volume").ok().flatten() {
            self.volume = volume.min(MAX_VOLUME as u64) as u8;
        }
        if let Some(muted) = config.getbool("audio", "muted").ok().flatten() {
            self.muted = muted;
        }

        // [game]
        if let Some(speed) = config.getfloat("game", "game_over_speed").ok().flatten()
            && speed > 0.0
        {
            self.game_over_speed = speed as f32;
        }
        if let Some(stage) = config.getuint("game", "stage").ok().flatten() {
            self.stage = stage.clamp(1, 3) as u8;
        }
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("audio", "volume", Some(self.volume.to_string()));
        config.set("audio", "muted", Some(self.muted.to_string()));

        config.set("game", "game_over_speed", Some(self.game_over_speed.to_string()));
        config.set("game", "stage", Some(self.stage.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Window size in the signed pixels raylib expects.
    pub fn window_size(&self) -> (i32, i32) {
        (
            clamp_side(u64::from(self.window_width), MIN_WINDOW_WIDTH) as i32,
            clamp_side(u64::from(self.window_height), MIN_WINDOW_HEIGHT) as i32,
        )
    }

    /// Volume actually sent to the audio thread.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }
}

fn clamp_side(value: u64, min: u32) -> u32 {
    if value < u64::from(min) || value > u64::from(MAX_WINDOW_SIDE) {
        warn!("window side {} out of range, clamped", value);
    }
    value.clamp(u64::from(min), u64::from(MAX_WINDOW_SIDE)) as u32
}
