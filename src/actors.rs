//! Actor roster and spawn helpers.
//!
//! Every actor is described by an [`ActorBlueprint`]. Spawning only needs the
//! unscaled frame size, which comes from the loaded textures in the game and
//! from [`ActorBlueprint::default_size`] in headless worlds.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;

use crate::components::animation::SpriteAnimation;
use crate::components::boundary::Boundary;
use crate::components::collision::CollisionState;
use crate::components::effect::{EffectDescriptor, EffectKind};
use crate::components::gameoverbanner::{GameOverBanner, TargetY};
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::{Hover, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{Sprite, SpriteKind};
use crate::components::vitals::Vitals;
use crate::resources::gameover::GAME_OVER_OFFSCREEN_MARGIN;
use crate::resources::screensize::ScreenSize;
use crate::systems::movement::random_y;

pub const PLAYER_INITIAL_X: f32 = 200.0;
pub const PLAYER_LIFE: i32 = 5;
pub const PLAYER_RINGS: i32 = 0;
pub const PLAYER_ACCELERATION: f32 = 0.4;
pub const PLAYER_FRICTION: f32 = 0.95;
pub const HOVER_AMPLITUDE: f32 = 1.5;
pub const HOVER_FREQUENCY: f32 = 0.006;

/// Upper bound on actors spawned for one level.
pub const MAX_ACTORS: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct ActorBlueprint {
    pub kind: SpriteKind,
    pub frame_paths: &'static [&'static str],
    pub frame_delay_ms: u32,
    pub initial_frame: usize,
    pub scale: f32,
    /// Horizontal velocity in pixels per 16 ms frame.
    pub speed: f32,
    pub effect: EffectDescriptor,
    pub default_size: (f32, f32),
}

pub static PLAYER: ActorBlueprint = ActorBlueprint {
    kind: SpriteKind::Player,
    frame_paths: &[
        "assets/sprites/sonic/sonic_1.png",
        "assets/sprites/sonic/sonic_2.png",
        "assets/sprites/sonic/sonic_3.png",
        "assets/sprites/sonic/sonic_4.png",
    ],
    frame_delay_ms: 100,
    initial_frame: 0,
    scale: 1.0,
    speed: 0.0,
    effect: EffectDescriptor {
        kind: EffectKind::None,
        life_delta: 0,
        ring_delta: 0,
    },
    default_size: (96.0, 96.0),
};

pub static GAME_OVER: ActorBlueprint = ActorBlueprint {
    kind: SpriteKind::GameOver,
    frame_paths: &["assets/images/game_over.png"],
    frame_delay_ms: 0,
    initial_frame: 0,
    scale: 1.0,
    speed: 0.0,
    effect: EffectDescriptor {
        kind: EffectKind::None,
        life_delta: 0,
        ring_delta: 0,
    },
    default_size: (600.0, 120.0),
};

const fn enemy(
    kind: SpriteKind,
    frame_paths: &'static [&'static str],
    frame_delay_ms: u32,
    scale: f32,
    speed: f32,
    ring_delta: i32,
) -> ActorBlueprint {
    ActorBlueprint {
        kind,
        frame_paths,
        frame_delay_ms,
        initial_frame: 0,
        scale,
        speed,
        effect: EffectDescriptor {
            kind: EffectKind::Damage,
            life_delta: -1,
            ring_delta,
        },
        default_size: (64.0, 64.0),
    }
}

/// Enemies and pickups, in spawn order.
pub static OBSTACLES: [ActorBlueprint; 7] = [
    enemy(
        SpriteKind::Buzz,
        &["assets/sprites/enemies/buzz/buzz_1.png", "assets/sprites/enemies/buzz/buzz_2.png"],
        130,
        1.2,
        -5.0,
        -2,
    ),
    enemy(
        SpriteKind::Bee,
        &["assets/sprites/enemies/bee/bee_1.png", "assets/sprites/enemies/bee/bee_2.png"],
        130,
        1.0,
        -4.0,
        -1,
    ),
    enemy(
        SpriteKind::Bat,
        &["assets/sprites/enemies/bat/bat_1.png", "assets/sprites/enemies/bat/bat_2.png"],
        130,
        1.0,
        -6.0,
        -2,
    ),
    enemy(
        SpriteKind::Flame,
        &["assets/sprites/enemies/flame/flame_1.png", "assets/sprites/enemies/flame/flame_2.png"],
        130,
        1.0,
        -7.0,
        -3,
    ),
    enemy(
        SpriteKind::Parrot,
        &[
            "assets/sprites/enemies/parrot/parrot_1.png",
            "assets/sprites/enemies/parrot/parrot_2.png",
        ],
        130,
        1.0,
        -3.0,
        -1,
    ),
    ActorBlueprint {
        kind: SpriteKind::Ring,
        frame_paths: &[
            "assets/sprites/ring/ring_1.png",
            "assets/sprites/ring/ring_2.png",
            "assets/sprites/ring/ring_3.png",
            "assets/sprites/ring/ring_4.png",
        ],
        frame_delay_ms: 100,
        initial_frame: 1,
        scale: 0.2,
        speed: -6.0,
        effect: EffectDescriptor {
            kind: EffectKind::Ring,
            life_delta: 0,
            ring_delta: 1,
        },
        default_size: (200.0, 200.0),
    },
    ActorBlueprint {
        kind: SpriteKind::Life,
        frame_paths: &[
            "assets/sprites/extra_lives/life_1.png",
            "assets/sprites/extra_lives/life_2.png",
        ],
        frame_delay_ms: 190,
        initial_frame: 1,
        scale: 0.5,
        speed: -7.0,
        effect: EffectDescriptor {
            kind: EffectKind::Life,
            life_delta: 1,
            ring_delta: 0,
        },
        default_size: (96.0, 96.0),
    },
];

/// Every blueprint, player and banner included.
pub fn all_blueprints() -> impl Iterator<Item = &'static ActorBlueprint> {
    [&PLAYER, &GAME_OVER].into_iter().chain(OBSTACLES.iter())
}

impl ActorBlueprint {
    fn sprite(&self, size: (f32, f32)) -> Sprite {
        Sprite::new(self.kind, size.0, size.1)
            .with_scale(self.scale)
            .with_frame(self.initial_frame)
    }

    fn animation(&self) -> SpriteAnimation {
        SpriteAnimation::new(self.frame_paths.len(), self.frame_delay_ms)
    }
}

/// Player at its start position, vertically centred.
pub fn spawn_player(world: &mut World, size: (f32, f32), screen: ScreenSize) -> Entity {
    let sprite = PLAYER.sprite(size);
    let position = MapPosition::new(PLAYER_INITIAL_X, screen.height() / 2.0);
    world
        .spawn((
            Player,
            Boundary::from_sprite(position.pos, &sprite),
            position,
            sprite,
            PLAYER.animation(),
            RigidBody::steerable(PLAYER_ACCELERATION, PLAYER_FRICTION),
            Hover::new(HOVER_AMPLITUDE, HOVER_FREQUENCY),
            Vitals::new(PLAYER_LIFE, PLAYER_RINGS),
            PLAYER.effect,
            CollisionState::None,
        ))
        .id()
}

/// Obstacle of `blueprint` centred at (`x`, `y`).
pub fn spawn_obstacle(
    world: &mut World,
    blueprint: &ActorBlueprint,
    size: (f32, f32),
    x: f32,
    y: f32,
) -> Entity {
    let sprite = blueprint.sprite(size);
    let position = MapPosition::new(x, y);
    world
        .spawn((
            Obstacle,
            Boundary::from_sprite(position.pos, &sprite),
            position,
            sprite,
            blueprint.animation(),
            RigidBody::scrolling(blueprint.speed),
            blueprint.effect,
            CollisionState::None,
        ))
        .id()
}

/// Hidden banner, horizontally centred, resting below the window.
pub fn spawn_game_over_banner(world: &mut World, size: (f32, f32), screen: ScreenSize) -> Entity {
    let sprite = GAME_OVER.sprite(size);
    world
        .spawn((
            GameOverBanner,
            TargetY(screen.height() / 2.0),
            MapPosition::new(
                screen.width() / 2.0,
                screen.height() + GAME_OVER_OFFSCREEN_MARGIN,
            ),
            sprite,
        ))
        .id()
}

#[derive(Debug, Clone)]
pub struct LevelActors {
    pub player: Entity,
    pub banner: Entity,
    pub obstacles: ArrayVec<Entity, MAX_ACTORS>,
}

/// Spawn the player, the banner and every obstacle just past the right edge.
///
/// `size_of` supplies the unscaled frame size per kind.
pub fn spawn_level(
    world: &mut World,
    size_of: impl Fn(&ActorBlueprint) -> (f32, f32),
    rng: &mut fastrand::Rng,
) -> LevelActors {
    let screen = *world.resource::<ScreenSize>();
    let player = spawn_player(world, size_of(&PLAYER), screen);
    let banner = spawn_game_over_banner(world, size_of(&GAME_OVER), screen);

    let mut obstacles = ArrayVec::new();
    for blueprint in OBSTACLES.iter() {
        let size = size_of(blueprint);
        let half_w = size.0 * blueprint.scale / 2.0;
        let half_h = size.1 * blueprint.scale / 2.0;
        let y = random_y(rng, half_h, screen.height());
        obstacles.push(spawn_obstacle(world, blueprint, size, screen.width() + half_w, y));
    }
    log::info!("spawned player, banner and {} obstacles", obstacles.len());

    LevelActors {
        player,
        banner,
        obstacles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_matches_actor_table() {
        let find = |kind: SpriteKind| OBSTACLES.iter().find(|b| b.kind == kind).unwrap();
        assert_eq!(find(SpriteKind::Buzz).speed, -5.0);
        assert_eq!(find(SpriteKind::Buzz).scale, 1.2);
        assert_eq!(find(SpriteKind::Flame).effect, EffectDescriptor::damage(-1, -3));
        assert_eq!(find(SpriteKind::Ring).effect, EffectDescriptor::ring(1));
        assert_eq!(find(SpriteKind::Life).effect, EffectDescriptor::life(1));
        assert_eq!(PLAYER.effect.kind, EffectKind::None);
    }

    #[test]
    fn every_enemy_damages() {
        for b in OBSTACLES.iter().filter(|b| b.kind.is_enemy()) {
            assert_eq!(b.effect.kind, EffectKind::Damage, "{:?}", b.kind);
            assert_eq!(b.effect.life_delta, -1);
        }
    }

    #[test]
    fn frame_counts_fit_the_texture_store() {
        for b in all_blueprints() {
            assert!(!b.frame_paths.is_empty());
            assert!(b.frame_paths.len() <= crate::resources::texturestore::MAX_FRAMES);
        }
    }

    #[test]
    fn level_spawns_off_screen_obstacles() {
        let mut world = World::new();
        world.insert_resource(ScreenSize { w: 1500, h: 800 });
        let mut rng = fastrand::Rng::with_seed(3);
        let level = spawn_level(&mut world, |b| b.default_size, &mut rng);
        assert_eq!(level.obstacles.len(), OBSTACLES.len());
        for &e in level.obstacles.iter() {
            let b = world.get::<Boundary>(e).unwrap();
            assert!(b.left >= 1500.0);
            assert!(b.top >= 0.0 && b.bottom <= 800.0);
        }
        let vitals = world.get::<Vitals>(level.player).unwrap();
        assert_eq!(*vitals, Vitals::new(5, 0));
    }
}
