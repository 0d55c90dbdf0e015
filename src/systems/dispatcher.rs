//! Event dispatcher.
//!
//! [`event_listener`] drains the [`EventQueue`] every frame, oldest first.
//! Handlers may queue follow-up events; those are handled in the same drain.
//! Unknown handles or IDs of the wrong category are ignored.
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::debug;

use crate::components::effect::EffectDescriptor;
use crate::components::gameoverbanner::{GameOverBanner, TargetY};
use crate::components::vitals::Vitals;
use crate::events::audio::{AudioCmd, AudioId};
use crate::events::emitter::{emit_game_over_start, emit_music, emit_stop_audio};
use crate::events::gameevent::{GameEvent, GameEventKind};
use crate::resources::eventqueue::EventQueue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gameover::{GameOverAnimation, GameOverSequence};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Everything the handlers read or mutate.
#[derive(SystemParam)]
pub struct EventDispatch<'w, 's> {
    pub queue: ResMut<'w, EventQueue>,
    pub sequence: ResMut<'w, GameOverSequence>,
    pub effects: Query<'w, 's, &'static EffectDescriptor>,
    pub vitals: Query<'w, 's, &'static mut Vitals>,
    pub banner: Query<'w, 's, &'static TargetY, With<GameOverBanner>>,
    pub audio: MessageWriter<'w, AudioCmd>,
    pub config: Res<'w, GameConfig>,
    pub screen: Res<'w, ScreenSize>,
    pub time: Res<'w, WorldTime>,
}

pub fn event_listener(mut dispatch: EventDispatch) {
    while let Some(event) = dispatch.queue.dequeue_event() {
        debug!("dispatch {} @{}", event.name(), event.timestamp);
        dispatch.handle(event);
    }
}

impl EventDispatch<'_, '_> {
    fn now(&self) -> u64 {
        self.time.elapsed_ms
    }

    fn handle(&mut self, event: GameEvent) {
        match event.kind {
            GameEventKind::LifeChanged { source, target } => self.on_life_changed(source, target),
            GameEventKind::RingsChanged { source, target } => self.on_rings_changed(source, target),
            GameEventKind::SoundEffect { id } => self.on_sound_effect(id),
            GameEventKind::MusicPlay { id, looped } => self.on_music_play(id, looped),
            GameEventKind::StopAudio => {
                self.audio.write(AudioCmd::StopAll);
            }
            GameEventKind::BackgroundChange { stage } => on_background_change(stage),
            // Hook for a camera shake; nothing shakes yet.
            GameEventKind::ScreenShake => {}
            GameEventKind::GameOverStart => self.on_game_over_start(),
        }
    }

    fn on_life_changed(&mut self, source: Entity, target: Entity) {
        let Ok(effect) = self.effects.get(source) else {
            return;
        };
        let delta = effect.life_delta;
        let Ok(mut vitals) = self.vitals.get_mut(target) else {
            return;
        };
        let life = vitals.apply_life_delta(delta);
        debug!("life {delta:+} -> {life}");
        if life <= 0 {
            let now = self.now();
            emit_game_over_start(&mut self.queue, now);
        }
    }

    fn on_rings_changed(&mut self, source: Entity, target: Entity) {
        let Ok(effect) = self.effects.get(source) else {
            return;
        };
        let delta = effect.ring_delta;
        if let Ok(mut vitals) = self.vitals.get_mut(target) {
            let rings = vitals.apply_ring_delta(delta);
            debug!("rings {delta:+} -> {rings}");
        }
    }

    fn on_sound_effect(&mut self, id: AudioId) {
        if id.is_sfx() {
            self.audio.write(AudioCmd::PlayFx { id });
        }
    }

    fn on_music_play(&mut self, id: AudioId, looped: bool) {
        if id.is_music() {
            self.audio.write(AudioCmd::PlayMusic { id, looped });
        }
    }

    fn on_game_over_start(&mut self) {
        let now = self.now();
        let window_h = self.screen.height();
        let target_y = self
            .banner
            .iter()
            .next()
            .map(|t| t.0)
            .unwrap_or(window_h / 2.0);
        let anim = GameOverAnimation::new(window_h, target_y, self.config.game_over_speed, now);
        if self.sequence.start(anim) {
            log::info!("game over");
            emit_stop_audio(&mut self.queue, now);
            emit_music(&mut self.queue, now, AudioId::MusicGameOver, false);
        }
    }
}

fn on_background_change(stage: u8) {
    let layer = match stage {
        0 => "stage_1",
        1 => "stage_2",
        2 => "stage_3",
        _ => "unknown",
    };
    debug!("background change to {layer} ignored: no background layer");
}
