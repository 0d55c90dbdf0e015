//! Gameplay events carried by the [`EventQueue`](crate::resources::eventqueue::EventQueue).
//!
//! Producers (collision handlers, the dispatcher itself) push a
//! [`GameEvent`] and the dispatcher drains them in FIFO order within the same
//! frame. Entity references are plain [`Entity`] handles; a handle whose
//! entity was despawned is simply ignored when the event is handled.

use bevy_ecs::prelude::Entity;

use crate::events::audio::AudioId;

/// Payload of a [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEventKind {
    /// Apply `source`'s life delta to `target`.
    LifeChanged { source: Entity, target: Entity },
    /// Apply `source`'s ring delta to `target`.
    RingsChanged { source: Entity, target: Entity },
    SoundEffect { id: AudioId },
    MusicPlay { id: AudioId, looped: bool },
    StopAudio,
    BackgroundChange { stage: u8 },
    ScreenShake,
    /// Player ran out of life.
    GameOverStart,
}

/// A queued event stamped with the world time (ms) it was emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEvent {
    pub timestamp: u64,
    pub kind: GameEventKind,
}

impl GameEvent {
    pub fn new(timestamp: u64, kind: GameEventKind) -> Self {
        Self { timestamp, kind }
    }

    /// Short tag for logs.
    pub fn name(&self) -> &'static str {
        match self.kind {
            GameEventKind::LifeChanged { .. } => "life_changed",
            GameEventKind::RingsChanged { .. } => "rings_changed",
            GameEventKind::SoundEffect { .. } => "sound_effect",
            GameEventKind::MusicPlay { .. } => "music_play",
            GameEventKind::StopAudio => "stop_audio",
            GameEventKind::BackgroundChange { .. } => "background_change",
            GameEventKind::ScreenShake => "screen_shake",
            GameEventKind::GameOverStart => "game_over_start",
        }
    }
}
