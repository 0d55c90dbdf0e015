//! Collision detection between the player and every other actor.
//!
//! Runs as three chained systems each frame:
//! 1. [`update_sprite_boundaries`] refreshes every [`Boundary`].
//! 2. [`update_collision_states`] steps each actor's [`CollisionState`]
//!    against the player's box.
//! 3. [`handle_collisions`] turns `Enter` into queued events and clears
//!    `Exit` back to `None`.
//!
//! Effects are never applied here; see
//! [`event_listener`](crate::systems::dispatcher::event_listener).
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boundary::Boundary;
use crate::components::collision::CollisionState;
use crate::components::effect::EffectDescriptor;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::{Sprite, SpriteKind};
use crate::events::emitter::emit_effect;
use crate::resources::eventqueue::EventQueue;
use crate::resources::worldtime::WorldTime;

/// Strict AABB overlap between two boundaries.
pub fn check_collision(a: &Boundary, b: &Boundary) -> bool {
    a.overlaps(b)
}

pub fn update_sprite_boundaries(mut query: Query<(&MapPosition, &Sprite, &mut Boundary)>) {
    for (position, sprite, mut boundary) in query.iter_mut() {
        *boundary = Boundary::from_sprite(position.pos, sprite);
    }
}

pub fn update_collision_states(
    player: Query<&Boundary, With<Player>>,
    mut actors: Query<(&Boundary, &mut CollisionState), Without<Player>>,
) {
    let Ok(player_box) = player.single() else {
        return;
    };
    for (boundary, mut state) in actors.iter_mut() {
        let next = state.next(check_collision(player_box, boundary));
        if *state != next {
            *state = next;
        }
    }
}

pub fn handle_collisions(
    mut player: Query<(Entity, &mut CollisionState), With<Player>>,
    mut actors: Query<(Entity, &Sprite, &EffectDescriptor, &mut CollisionState), Without<Player>>,
    mut queue: ResMut<EventQueue>,
    time: Res<WorldTime>,
) {
    let Ok((player_entity, mut player_state)) = player.single_mut() else {
        return;
    };
    let now = time.elapsed_ms;
    for (entity, sprite, effect, mut state) in actors.iter_mut() {
        match *state {
            CollisionState::Enter => {
                debug!("player touched {} {:?}", sprite.kind.name(), entity);
                handle_collision_enter(&mut queue, now, entity, player_entity, sprite.kind, effect);
            }
            CollisionState::Stay | CollisionState::None => {}
            CollisionState::Exit => {
                *state = CollisionState::None;
                *player_state = CollisionState::None;
            }
        }
    }
}

/// Queue the events for the player first touching `source`.
///
/// Returns how many events were accepted by the queue.
pub fn handle_collision_enter(
    queue: &mut EventQueue,
    now: u64,
    source: Entity,
    player: Entity,
    kind: SpriteKind,
    effect: &EffectDescriptor,
) -> usize {
    emit_effect(queue, now, source, player, kind, effect)
}
