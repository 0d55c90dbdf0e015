//! Headless gameplay tick tests: collisions, effects, the event drain and the
//! game-over sequence, driven through the real gameplay schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use sonic_airborne::actors::{self, ActorBlueprint, OBSTACLES, PLAYER};
use sonic_airborne::components::boundary::Boundary;
use sonic_airborne::components::collision::CollisionState;
use sonic_airborne::components::gameoverbanner::GameOverBanner;
use sonic_airborne::components::mapposition::MapPosition;
use sonic_airborne::components::sprite::SpriteKind;
use sonic_airborne::components::vitals::Vitals;
use sonic_airborne::events::audio::{AudioCmd, AudioId};
use sonic_airborne::events::emitter::{emit_music, emit_sfx};
use sonic_airborne::game::{gameplay_schedule, init_world};
use sonic_airborne::resources::audio::init_audio_messages;
use sonic_airborne::resources::eventqueue::EventQueue;
use sonic_airborne::resources::gameconfig::GameConfig;
use sonic_airborne::resources::gameover::{
    GAME_OVER_OFFSCREEN_MARGIN, GameOverOverlay, GameOverPhase, GameOverSequence,
};
use sonic_airborne::resources::input::InputState;
use sonic_airborne::resources::screensize::ScreenSize;
use sonic_airborne::resources::worldtime::WorldTime;
use sonic_airborne::systems::time::update_world_time;

const FRAME_MS: u32 = 16;

struct Harness {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Harness {
    fn new() -> Self {
        let mut world = init_world(&GameConfig::default());
        init_audio_messages(&mut world);
        let screen = *world.resource::<ScreenSize>();
        let player = actors::spawn_player(&mut world, PLAYER.default_size, screen);
        actors::spawn_game_over_banner(&mut world, actors::GAME_OVER.default_size, screen);
        Self {
            world,
            schedule: gameplay_schedule(),
            player,
        }
    }

    /// Static copy of the obstacle of `kind`, so it stays where it is put.
    fn blueprint(kind: SpriteKind) -> ActorBlueprint {
        let mut bp = *OBSTACLES
            .iter()
            .find(|b| b.kind == kind)
            .expect("kind is in the roster");
        bp.speed = 0.0;
        bp
    }

    fn player_pos(&self) -> Vector2 {
        self.world.get::<MapPosition>(self.player).unwrap().pos
    }

    /// Spawn a stationary obstacle centred on the player.
    fn spawn_on_player(&mut self, kind: SpriteKind) -> Entity {
        let pos = self.player_pos();
        let bp = Self::blueprint(kind);
        actors::spawn_obstacle(&mut self.world, &bp, bp.default_size, pos.x, pos.y)
    }

    /// Spawn a stationary obstacle far from the player.
    fn spawn_far(&mut self, kind: SpriteKind) -> Entity {
        let bp = Self::blueprint(kind);
        actors::spawn_obstacle(&mut self.world, &bp, bp.default_size, 1400.0, 100.0)
    }

    fn move_to(&mut self, entity: Entity, pos: Vector2) {
        self.world.get_mut::<MapPosition>(entity).unwrap().pos = pos;
    }

    fn tick(&mut self) {
        update_world_time(&mut self.world, FRAME_MS);
        self.schedule.run(&mut self.world);
    }

    fn vitals(&self) -> Vitals {
        *self.world.get::<Vitals>(self.player).unwrap()
    }

    fn set_vitals(&mut self, life: i32, rings: i32) {
        *self.world.get_mut::<Vitals>(self.player).unwrap() = Vitals::new(life, rings);
    }

    fn state(&self, entity: Entity) -> CollisionState {
        *self.world.get::<CollisionState>(entity).unwrap()
    }

    fn drain_audio(&mut self) -> Vec<AudioCmd> {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }

    fn phase(&self) -> GameOverPhase {
        self.world.resource::<GameOverSequence>().phase
    }

    fn now(&self) -> u64 {
        self.world.resource::<WorldTime>().elapsed_ms
    }
}

#[test]
fn damage_applies_once_per_contact_and_clamps_rings() {
    let mut h = Harness::new();
    let buzz = h.spawn_on_player(SpriteKind::Buzz);

    h.tick();
    assert_eq!(h.state(buzz), CollisionState::Enter);
    assert_eq!(h.vitals(), Vitals::new(4, 0));
    assert_eq!(
        h.drain_audio(),
        vec![AudioCmd::PlayFx {
            id: AudioId::SfxCollisionBuzz
        }]
    );

    for _ in 0..10 {
        h.tick();
        assert_eq!(h.state(buzz), CollisionState::Stay);
    }
    assert_eq!(h.vitals(), Vitals::new(4, 0));
    assert!(h.drain_audio().is_empty());
    assert!(h.world.resource::<EventQueue>().is_queue_empty());
}

#[test]
fn ring_pickup_adds_one_ring_and_one_sound() {
    let mut h = Harness::new();
    h.spawn_on_player(SpriteKind::Ring);

    h.tick();
    h.tick();
    assert_eq!(h.vitals(), Vitals::new(5, 1));
    assert_eq!(
        h.drain_audio(),
        vec![AudioCmd::PlayFx {
            id: AudioId::SfxRing
        }]
    );
}

#[test]
fn life_pickup_adds_a_life() {
    let mut h = Harness::new();
    h.spawn_on_player(SpriteKind::Life);
    h.tick();
    assert_eq!(h.vitals(), Vitals::new(6, 0));
    assert_eq!(
        h.drain_audio(),
        vec![AudioCmd::PlayFx {
            id: AudioId::SfxLife
        }]
    );
}

#[test]
fn leaving_and_returning_triggers_the_effect_again() {
    let mut h = Harness::new();
    h.set_vitals(5, 10);
    let bat = h.spawn_on_player(SpriteKind::Bat);

    h.tick();
    assert_eq!(h.vitals(), Vitals::new(4, 8));

    h.move_to(bat, Vector2::new(1400.0, 100.0));
    h.tick();
    // Exit is observed and cleared within the same frame.
    assert_eq!(h.state(bat), CollisionState::None);
    assert_eq!(h.state(h.player), CollisionState::None);
    h.tick();
    assert_eq!(h.state(bat), CollisionState::None);

    let pos = h.player_pos();
    h.move_to(bat, pos);
    h.tick();
    assert_eq!(h.state(bat), CollisionState::Enter);
    assert_eq!(h.vitals(), Vitals::new(3, 6));
}

#[test]
fn distant_obstacles_never_collide() {
    let mut h = Harness::new();
    let flame = h.spawn_far(SpriteKind::Flame);
    for _ in 0..5 {
        h.tick();
    }
    assert_eq!(h.state(flame), CollisionState::None);
    assert_eq!(h.vitals(), Vitals::new(5, 0));
}

#[test]
fn audio_handlers_only_forward_matching_categories() {
    let mut h = Harness::new();
    {
        let mut queue = h.world.resource_mut::<EventQueue>();
        emit_sfx(&mut queue, 0, AudioId::MusicStage1);
        emit_music(&mut queue, 0, AudioId::SfxRing, true);
        emit_sfx(&mut queue, 0, AudioId::SfxCollisionBee);
        emit_music(&mut queue, 0, AudioId::MusicStage2, true);
    }
    h.tick();
    assert_eq!(
        h.drain_audio(),
        vec![
            AudioCmd::PlayFx {
                id: AudioId::SfxCollisionBee
            },
            AudioCmd::PlayMusic {
                id: AudioId::MusicStage2,
                looped: true
            },
        ]
    );
}

#[test]
fn last_life_runs_the_full_game_over_sequence() {
    let mut h = Harness::new();
    h.set_vitals(1, 0);
    h.spawn_on_player(SpriteKind::Parrot);

    h.tick();
    assert_eq!(h.vitals().life, 0);
    assert!(matches!(h.phase(), GameOverPhase::Animating(_)));
    assert_eq!(
        h.drain_audio(),
        vec![
            AudioCmd::PlayFx {
                id: AudioId::SfxCollisionParrot
            },
            AudioCmd::StopAll,
            AudioCmd::PlayMusic {
                id: AudioId::MusicGameOver,
                looped: false
            },
        ]
    );
    let overlay = *h.world.resource::<GameOverOverlay>();
    assert!(overlay.is_active);

    // Banner slides up monotonically until it reaches mid-screen.
    let mut last_y = overlay.y;
    let mut frames = 0;
    while matches!(h.phase(), GameOverPhase::Animating(_)) {
        h.tick();
        let y = h.world.resource::<GameOverOverlay>().y;
        assert!(y <= last_y);
        last_y = y;
        frames += 1;
        assert!(frames < 1000, "animation never completed");
    }
    assert!(matches!(h.phase(), GameOverPhase::Complete { .. }));

    h.tick();
    let GameOverPhase::DelayedReset { deadline } = h.phase() else {
        panic!("expected delayed reset, got {:?}", h.phase());
    };
    let complete_at = h.now();
    assert_eq!(deadline, complete_at + 3000);
    let overlay = *h.world.resource::<GameOverOverlay>();
    assert_eq!(overlay.y, 400.0);
    assert!(overlay.is_active);

    while matches!(h.phase(), GameOverPhase::DelayedReset { .. }) {
        assert!(h.now() < deadline + FRAME_MS as u64);
        h.tick();
    }
    assert!(h.now() >= deadline);
    assert_eq!(h.phase(), GameOverPhase::Reset);
    assert!(h.world.resource::<GameOverOverlay>().is_active);

    h.tick();
    assert_eq!(h.phase(), GameOverPhase::Idle);
    let overlay = *h.world.resource::<GameOverOverlay>();
    assert!(!overlay.is_active);
    assert_eq!(overlay.y, 800.0 + GAME_OVER_OFFSCREEN_MARGIN);

    let mut banner = h
        .world
        .query_filtered::<&MapPosition, With<GameOverBanner>>();
    let banner_y = banner.single(&h.world).unwrap().pos.y;
    assert_eq!(banner_y, overlay.y);

    // Nothing was revived.
    assert_eq!(h.vitals().life, 0);
    assert!(h.drain_audio().is_empty());
}

#[test]
fn further_damage_during_game_over_is_ignored() {
    let mut h = Harness::new();
    h.set_vitals(1, 0);
    h.spawn_on_player(SpriteKind::Buzz);
    h.tick();
    assert!(matches!(h.phase(), GameOverPhase::Animating(_)));
    h.drain_audio();

    let bee = h.spawn_far(SpriteKind::Bee);
    let pos = h.player_pos();
    h.move_to(bee, pos);
    h.tick();

    assert_eq!(h.vitals().life, 0);
    // Only the bee's collision sound; no second game-over cue.
    assert_eq!(
        h.drain_audio(),
        vec![AudioCmd::PlayFx {
            id: AudioId::SfxCollisionBee
        }]
    );
}

#[test]
fn obstacles_wrap_to_the_right_edge() {
    let mut h = Harness::new();
    let bp = OBSTACLES
        .iter()
        .find(|b| b.kind == SpriteKind::Bat)
        .copied()
        .unwrap();
    let bat = actors::spawn_obstacle(&mut h.world, &bp, bp.default_size, -40.0, 300.0);

    h.tick();
    let pos = h.world.get::<MapPosition>(bat).unwrap().pos;
    let half_w = bp.default_size.0 * bp.scale / 2.0;
    let half_h = bp.default_size.1 * bp.scale / 2.0;
    assert_eq!(pos.x, 1500.0 + half_w);
    assert!(pos.y >= half_h && pos.y < 800.0 - half_h);

    h.tick();
    let moved = h.world.get::<MapPosition>(bat).unwrap().pos;
    assert!(moved.x < pos.x);
}

#[test]
fn player_stays_inside_the_window() {
    let mut h = Harness::new();
    {
        let mut input = h.world.resource_mut::<InputState>();
        input.left.active = true;
        input.up.active = true;
    }
    for _ in 0..300 {
        h.tick();
    }
    let b = *h.world.get::<Boundary>(h.player).unwrap();
    assert!(b.left >= 0.0 && b.top >= 0.0);
    assert!((b.left - 0.0).abs() < 1e-3);
    assert!((b.top - 0.0).abs() < 1e-3);

    {
        let mut input = h.world.resource_mut::<InputState>();
        input.left.active = false;
        input.up.active = false;
        input.right.active = true;
        input.down.active = true;
    }
    for _ in 0..400 {
        h.tick();
    }
    let b = *h.world.get::<Boundary>(h.player).unwrap();
    assert!((b.right - 1500.0).abs() < 1e-3);
    assert!((b.bottom - 800.0).abs() < 1e-3);
}

#[test]
fn idle_player_hovers_without_drifting_away() {
    let mut h = Harness::new();
    let start = h.player_pos();
    for _ in 0..200 {
        h.tick();
        let pos = h.player_pos();
        assert_eq!(pos.x, start.x);
        assert!((pos.y - start.y).abs() < 60.0);
    }
}
