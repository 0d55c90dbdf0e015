//! Audio system implementation backed by a dedicated thread and raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the raylib audio device
//!   and every loaded [`Music`]/[`Sound`], and answers [`AudioCmd`]s with
//!   [`AudioMessage`]s.
//! - [`forward_audio_cmds`] and [`poll_audio_messages`] move messages across
//!   the crossbeam channels each frame.
//!
//! Gameplay code never sees paths or handles, only [`AudioId`]s.

use crate::events::audio::{AudioCmd, AudioId, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::{debug, error, info};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use raylib::ffi;
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS `AudioCmd` messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // The thread may already be gone on shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Log replies from the audio thread. A failed load is fatal.
pub fn check_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::LoadFailed { id, error } => {
                error!("Failed to load audio {:?}: {}", id, error);
                std::process::exit(1);
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Commands to load every sound and track that has an asset.
pub fn load_all_audio_cmds() -> Vec<AudioCmd> {
    AudioId::ALL
        .iter()
        .filter_map(|&id| {
            let path = id.path()?.to_string();
            Some(if id.is_music() {
                AudioCmd::LoadMusic { id, path }
            } else {
                AudioCmd::LoadFx { id, path }
            })
        })
        .collect()
}

struct AudioState<'a> {
    audio: &'a RaylibAudio,
    musics: FxHashMap<AudioId, Music<'a>>,
    sounds: FxHashMap<AudioId, Sound<'a>>,
    playing: FxHashSet<AudioId>,
    tx: Sender<AudioMessage>,
}

impl<'a> AudioState<'a> {
    fn send(&self, msg: AudioMessage) {
        let _ = self.tx.send(msg);
    }

    /// Returns `false` on shutdown.
    fn apply(&mut self, cmd: AudioCmd) -> bool {
        match cmd {
            AudioCmd::LoadMusic { id, path } => match self.audio.new_music(&path) {
                Ok(music) => {
                    debug!("[audio] loaded {:?} from '{}'", id, path);
                    self.musics.insert(id, music);
                    self.send(AudioMessage::Loaded { id });
                }
                Err(e) => self.send(AudioMessage::LoadFailed {
                    id,
                    error: format!("'{}': {}", path, e),
                }),
            },
            AudioCmd::LoadFx { id, path } => match self.audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("[audio] fx loaded {:?} from '{}'", id, path);
                    self.sounds.insert(id, sound);
                    self.send(AudioMessage::Loaded { id });
                }
                Err(e) => self.send(AudioMessage::LoadFailed {
                    id,
                    error: format!("'{}': {}", path, e),
                }),
            },
            AudioCmd::PlayFx { id } => match self.sounds.get(&id) {
                Some(sound) => sound.play(),
                None => debug!("[audio] fx {:?} not loaded", id),
            },
            AudioCmd::PlayMusic { id, looped } => {
                if let Some(music) = self.musics.get_mut(&id) {
                    debug!("[audio] play {:?} looped={}", id, looped);
                    // raylib loads every stream with looping on.
                    set_stream_looping(music, looped);
                    music.seek_stream(0.0);
                    music.play_stream();
                    self.playing.insert(id);
                    self.send(AudioMessage::MusicPlayStarted { id });
                }
            }
            AudioCmd::StopAll => {
                for music in self.musics.values() {
                    music.stop_stream();
                }
                for sound in self.sounds.values() {
                    sound.stop();
                }
                self.playing.clear();
                self.send(AudioMessage::Stopped);
            }
            AudioCmd::SetVolume { volume } => {
                self.audio.set_master_volume(f32::from(volume.min(128)) / 128.0);
            }
            AudioCmd::Shutdown => return false,
        }
        true
    }

    /// Keep streams fed and report tracks that stopped on their own.
    ///
    /// raylib rewinds looping streams itself, so only one-shot tracks ever
    /// leave the playing state here.
    fn pump(&mut self) {
        let mut ended: Vec<AudioId> = Vec::new();
        for id in self.playing.iter() {
            if let Some(music) = self.musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    ended.push(*id);
                }
            }
        }
        for id in ended {
            self.playing.remove(&id);
            self.send(AudioMessage::MusicFinished { id });
        }
    }
}

/// Copy the requested loop mode onto a raylib music stream.
fn set_stream_looping(stream: &mut ffi::Music, looped: bool) {
    stream.looping = looped;
}

/// Entry point of the dedicated audio thread.
///
/// Blocks until [`AudioCmd::Shutdown`] arrives or the command channel closes.
/// Without an audio device the thread still drains commands so the game runs
/// silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] device unavailable, running silent: {}", e);
            while let Ok(cmd) = rx_cmd.recv() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };
    info!("[audio] thread started");

    let mut state = AudioState {
        audio: &audio,
        musics: FxHashMap::default(),
        sounds: FxHashMap::default(),
        playing: FxHashSet::default(),
        tx: tx_msg,
    };

    'run: loop {
        loop {
            match rx_cmd.try_recv() {
                Ok(cmd) => {
                    if !state.apply(cmd) {
                        break 'run;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break 'run,
            }
        }
        state.pump();
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    drop(state);
    info!("[audio] thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_all_routes_by_category() {
        let cmds = load_all_audio_cmds();
        assert_eq!(cmds.len(), AudioId::ALL.len() - 1);
        assert!(!cmds.iter().any(|c| matches!(
            c,
            AudioCmd::LoadFx {
                id: AudioId::SfxRing,
                ..
            }
        )));
        assert!(cmds.contains(&AudioCmd::LoadMusic {
            id: AudioId::MusicGameOver,
            path: "assets/sounds/game_over.mp3".to_string(),
        }));
        assert!(cmds.contains(&AudioCmd::LoadFx {
            id: AudioId::SfxCollisionBat,
            path: "assets/sounds/collisions/bat.mp3".to_string(),
        }));
    }

    #[test]
    fn stream_loop_flag_follows_request() {
        // SAFETY: ffi::Music is plain C data; null buffers are never read here.
        let mut stream: ffi::Music = unsafe { std::mem::zeroed() };
        stream.looping = true;
        set_stream_looping(&mut stream, false);
        assert!(!stream.looping);
        set_stream_looping(&mut stream, true);
        assert!(stream.looping);
    }
}
