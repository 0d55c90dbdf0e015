//! Helpers that stamp and push [`GameEvent`]s onto the [`EventQueue`].
//!
//! Every helper reports whether the queue accepted the event. Callers are
//! free to ignore it; a full queue only loses the event and logs it at trace
//! level.

use bevy_ecs::prelude::Entity;

use crate::components::effect::{EffectDescriptor, EffectKind};
use crate::components::sprite::SpriteKind;
use crate::events::audio::{AudioId, collision_sound};
use crate::events::gameevent::{GameEvent, GameEventKind};
use crate::resources::eventqueue::EventQueue;

pub fn emit(queue: &mut EventQueue, now: u64, kind: GameEventKind) -> bool {
    queue.queue_event(GameEvent::new(now, kind))
}

pub fn emit_life_change(
    queue: &mut EventQueue,
    now: u64,
    source: Entity,
    target: Entity,
) -> bool {
    emit(queue, now, GameEventKind::LifeChanged { source, target })
}

pub fn emit_rings_change(
    queue: &mut EventQueue,
    now: u64,
    source: Entity,
    target: Entity,
) -> bool {
    emit(queue, now, GameEventKind::RingsChanged { source, target })
}

pub fn emit_sfx(queue: &mut EventQueue, now: u64, id: AudioId) -> bool {
    emit(queue, now, GameEventKind::SoundEffect { id })
}

pub fn emit_music(queue: &mut EventQueue, now: u64, id: AudioId, looped: bool) -> bool {
    emit(queue, now, GameEventKind::MusicPlay { id, looped })
}

pub fn emit_stop_audio(queue: &mut EventQueue, now: u64) -> bool {
    emit(queue, now, GameEventKind::StopAudio)
}

pub fn emit_background_change(queue: &mut EventQueue, now: u64, stage: u8) -> bool {
    emit(queue, now, GameEventKind::BackgroundChange { stage })
}

pub fn emit_game_over_start(queue: &mut EventQueue, now: u64) -> bool {
    emit(queue, now, GameEventKind::GameOverStart)
}

/// Queue the events for the player first touching `source`.
///
/// Damage yields life, rings, then sound. Pickups yield their counter then
/// sound. Kinds without a collision sound skip the sound event. Returns how
/// many events the queue accepted.
pub fn emit_effect(
    queue: &mut EventQueue,
    now: u64,
    source: Entity,
    target: Entity,
    kind: SpriteKind,
    effect: &EffectDescriptor,
) -> usize {
    let mut accepted = 0;
    match effect.kind {
        EffectKind::None => return 0,
        EffectKind::Damage => {
            accepted += usize::from(emit_life_change(queue, now, source, target));
            accepted += usize::from(emit_rings_change(queue, now, source, target));
        }
        EffectKind::Ring => {
            accepted += usize::from(emit_rings_change(queue, now, source, target));
        }
        EffectKind::Life => {
            accepted += usize::from(emit_life_change(queue, now, source, target));
        }
    }
    if let Some(id) = collision_sound(kind) {
        accepted += usize::from(emit_sfx(queue, now, id));
    }
    accepted
}
