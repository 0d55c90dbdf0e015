//! Audio identifiers and the command/reply messages exchanged with the audio
//! thread.
//!
//! Gameplay code only ever names sounds by [`AudioId`]; the audio thread owns
//! the mapping from IDs to loaded raylib handles.

use bevy_ecs::message::Message;

use crate::components::sprite::SpriteKind;

/// Every sound effect and music track the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioId {
    SfxCollisionBuzz,
    SfxCollisionBee,
    SfxCollisionBat,
    SfxCollisionFlame,
    SfxCollisionParrot,
    SfxRing,
    SfxLife,
    MusicStage1,
    MusicStage2,
    MusicStage3,
    MusicGameOver,
}

impl AudioId {
    pub const ALL: [AudioId; 11] = [
        AudioId::SfxCollisionBuzz,
        AudioId::SfxCollisionBee,
        AudioId::SfxCollisionBat,
        AudioId::SfxCollisionFlame,
        AudioId::SfxCollisionParrot,
        AudioId::SfxRing,
        AudioId::SfxLife,
        AudioId::MusicStage1,
        AudioId::MusicStage2,
        AudioId::MusicStage3,
        AudioId::MusicGameOver,
    ];

    pub fn is_music(&self) -> bool {
        matches!(
            self,
            AudioId::MusicStage1 | AudioId::MusicStage2 | AudioId::MusicStage3 | AudioId::MusicGameOver
        )
    }

    pub fn is_sfx(&self) -> bool {
        !self.is_music()
    }

    /// Stage soundtrack for a 1-based stage number. Out of range stages have none.
    pub fn stage_music(stage: u8) -> Option<AudioId> {
        match stage {
            1 => Some(AudioId::MusicStage1),
            2 => Some(AudioId::MusicStage2),
            3 => Some(AudioId::MusicStage3),
            _ => None,
        }
    }

    /// Asset path relative to the working directory.
    ///
    /// Bee shares the buzz sample. The ring pickup has no sample, so playing
    /// it is silent.
    pub fn path(&self) -> Option<&'static str> {
        let path = match self {
            AudioId::SfxCollisionBuzz | AudioId::SfxCollisionBee => {
                "assets/sounds/collisions/buzz_and_bee.mp3"
            }
            AudioId::SfxCollisionBat => "assets/sounds/collisions/bat.mp3",
            AudioId::SfxCollisionFlame => "assets/sounds/collisions/flame.mp3",
            AudioId::SfxCollisionParrot => "assets/sounds/collisions/parrot.mp3",
            AudioId::SfxRing => return None,
            AudioId::SfxLife => "assets/sounds/extra_life.mp3",
            AudioId::MusicStage1 => "assets/sounds/stages/stage_1.mp3",
            AudioId::MusicStage2 => "assets/sounds/stages/stage_2.mp3",
            AudioId::MusicStage3 => "assets/sounds/stages/stage_3.mp3",
            AudioId::MusicGameOver => "assets/sounds/game_over.mp3",
        };
        Some(path)
    }
}

/// Sound played when the player touches an actor of `kind`.
pub fn collision_sound(kind: SpriteKind) -> Option<AudioId> {
    match kind {
        SpriteKind::Buzz => Some(AudioId::SfxCollisionBuzz),
        SpriteKind::Bee => Some(AudioId::SfxCollisionBee),
        SpriteKind::Bat => Some(AudioId::SfxCollisionBat),
        SpriteKind::Flame => Some(AudioId::SfxCollisionFlame),
        SpriteKind::Parrot => Some(AudioId::SfxCollisionParrot),
        SpriteKind::Ring => Some(AudioId::SfxRing),
        SpriteKind::Life => Some(AudioId::SfxLife),
        SpriteKind::Player | SpriteKind::GameOver => None,
    }
}

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: AudioId, path: String },
    LoadMusic { id: AudioId, path: String },
    PlayFx { id: AudioId },
    PlayMusic { id: AudioId, looped: bool },
    /// Stop every playing music stream and sound.
    StopAll,
    /// Master volume, 0..=128.
    SetVolume { volume: u8 },
    Shutdown,
}

/// Replies sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    Loaded { id: AudioId },
    LoadFailed { id: AudioId, error: String },
    MusicPlayStarted { id: AudioId },
    MusicFinished { id: AudioId },
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_split_into_music_and_sfx() {
        let music = AudioId::ALL.iter().filter(|id| id.is_music()).count();
        let sfx = AudioId::ALL.iter().filter(|id| id.is_sfx()).count();
        assert_eq!(music, 4);
        assert_eq!(sfx, 7);
    }

    #[test]
    fn collision_sound_covers_actors_only() {
        assert_eq!(collision_sound(SpriteKind::Bat), Some(AudioId::SfxCollisionBat));
        assert_eq!(collision_sound(SpriteKind::Ring), Some(AudioId::SfxRing));
        assert_eq!(collision_sound(SpriteKind::Life), Some(AudioId::SfxLife));
        assert_eq!(collision_sound(SpriteKind::Player), None);
        assert_eq!(collision_sound(SpriteKind::GameOver), None);
    }

    #[test]
    fn stage_music_is_one_based() {
        assert_eq!(AudioId::stage_music(1), Some(AudioId::MusicStage1));
        assert_eq!(AudioId::stage_music(3), Some(AudioId::MusicStage3));
        assert_eq!(AudioId::stage_music(0), None);
        assert_eq!(AudioId::stage_music(4), None);
    }
}
