//! World setup and schedules.
//!
//! [`init_world`] inserts every resource the gameplay systems need.
//! [`gameplay_schedule`] holds the strictly ordered per-frame simulation and
//! runs headless; [`frame_schedule`] wraps it with input, audio and rendering
//! for the real game loop.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::actors::{self, ActorBlueprint, LevelActors};
use crate::components::sprite::SpriteKind;
use crate::events::audio::{AudioCmd, AudioId};
use crate::events::emitter::{emit_background_change, emit_music};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::eventqueue::EventQueue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gameover::{GameOverOverlay, GameOverSequence};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{TextureStore, background_path};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::{
    forward_audio_cmds, load_all_audio_cmds, check_audio_messages, poll_audio_messages,
    update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::collision::{
    handle_collisions, update_collision_states, update_sprite_boundaries,
};
use crate::systems::dispatcher::event_listener;
use crate::systems::gameover::{game_over_sequencer, sync_game_over_banner};
use crate::systems::input::update_input_state;
use crate::systems::movement::obstacle_motion;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_system;

/// Fresh world holding the gameplay resources for `config`.
///
/// Audio messages are not registered here; call
/// [`setup_audio`](crate::resources::audio::setup_audio) or
/// [`init_audio_messages`](crate::resources::audio::init_audio_messages).
pub fn init_world(config: &GameConfig) -> World {
    let mut world = World::new();
    let (w, h) = config.window_size();
    let screen = ScreenSize { w, h };
    world.insert_resource(WorldTime::default());
    world.insert_resource(screen);
    world.insert_resource(EventQueue::new());
    world.insert_resource(GameOverSequence::default());
    world.insert_resource(GameOverOverlay::hidden(screen.height()));
    world.insert_resource(InputState::default());
    world.insert_resource(config.clone());
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
    world
}

/// Per-frame simulation: motion, collisions, event drain, game-over step.
pub fn gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_controller,
            obstacle_motion,
            animation,
            update_sprite_boundaries,
            update_collision_states,
            handle_collisions,
            event_listener,
            game_over_sequencer,
            sync_game_over_banner,
        )
            .chain(),
    );
    schedule
}

/// Input, simulation, audio bridge and rendering, in that order.
pub fn frame_schedule() -> Schedule {
    let mut schedule = gameplay_schedule();
    schedule.add_systems(update_input_state.before(player_controller));
    schedule.add_systems(
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            check_audio_messages,
        )
            .chain()
            .after(sync_game_over_banner),
    );
    schedule.add_systems(render_system.after(check_audio_messages));
    schedule
}

/// Load every actor texture and the stage backdrop. Any missing file is an error.
pub fn load_textures(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    stage: u8,
) -> Result<TextureStore, String> {
    let mut store = TextureStore::default();
    for blueprint in actors::all_blueprints() {
        store.load_frames(rl, th, blueprint.kind, blueprint.frame_paths)?;
    }
    store.load_background(rl, th, &background_path(stage))?;
    Ok(store)
}

/// Unscaled size for `blueprint`, from its loaded texture when available.
pub fn blueprint_size(store: Option<&TextureStore>, blueprint: &ActorBlueprint) -> (f32, f32) {
    store
        .and_then(|s| s.frame_size(blueprint.kind))
        .unwrap_or(blueprint.default_size)
}

/// Spawn the level, queue audio loading and start the stage soundtrack.
///
/// Requires `Messages<AudioCmd>` to be registered.
pub fn start_level(world: &mut World, rng: &mut fastrand::Rng) -> LevelActors {
    let sizes: FxHashMap<SpriteKind, (f32, f32)> = actors::all_blueprints()
        .map(|b| (b.kind, blueprint_size(world.get_resource::<TextureStore>(), b)))
        .collect();
    let level = actors::spawn_level(
        world,
        |b| sizes.get(&b.kind).copied().unwrap_or(b.default_size),
        rng,
    );

    let config = world.resource::<GameConfig>().clone();
    {
        let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
        cmds.write_batch(load_all_audio_cmds());
        cmds.write(AudioCmd::SetVolume {
            volume: config.effective_volume(),
        });
    }

    let now = world.resource::<WorldTime>().elapsed_ms;
    let mut queue = world.resource_mut::<EventQueue>();
    emit_background_change(&mut queue, now, config.stage.saturating_sub(1));
    if let Some(id) = AudioId::stage_music(config.stage) {
        emit_music(&mut queue, now, id, true);
    }
    level
}
