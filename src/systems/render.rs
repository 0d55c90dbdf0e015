//! Rendering.
//!
//! Draws the stage backdrop, then every sprite centred on its
//! [`MapPosition`]. The game-over banner is drawn only while the overlay is
//! active. With [`DebugMode`] present, collision boxes and counters are drawn
//! on top.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boundary::Boundary;
use crate::components::collision::CollisionState;
use crate::components::gameoverbanner::GameOverBanner;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::vitals::Vitals;
use crate::resources::debugmode::DebugMode;
use crate::resources::eventqueue::EventQueue;
use crate::resources::gameover::GameOverOverlay;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: Res<TextureStore>,
    screen: Res<ScreenSize>,
    overlay: Res<GameOverOverlay>,
    debug: Option<Res<DebugMode>>,
    queue: Res<EventQueue>,
    actors: Query<(&Sprite, &MapPosition, Has<Player>, Has<GameOverBanner>)>,
    boxes: Query<(&Boundary, Option<&CollisionState>)>,
    player: Query<&Vitals, With<Player>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    if let Some(bg) = textures.background.as_ref() {
        let src = Rectangle::new(0.0, 0.0, bg.width() as f32, bg.height() as f32);
        let dest = Rectangle::new(0.0, 0.0, screen.width(), screen.height());
        d.draw_texture_pro(bg, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    // Obstacles first, then the player, then the banner on top.
    let mut ordered: Vec<(&Sprite, &MapPosition, u8)> = actors
        .iter()
        .filter(|(_, _, _, is_banner)| !is_banner || overlay.is_active)
        .map(|(sprite, pos, is_player, is_banner)| {
            let layer = if is_banner { 2 } else { u8::from(is_player) };
            (sprite, pos, layer)
        })
        .collect();
    ordered.sort_by_key(|(_, _, layer)| *layer);

    for (sprite, pos, _) in ordered {
        let Some(tex) = textures.frame(sprite.kind, sprite.current_frame) else {
            continue;
        };
        let (w, h) = sprite.scaled_size();
        let src = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
        let dest = Rectangle::new(pos.pos.x, pos.pos.y, w, h);
        let origin = Vector2::new(w / 2.0, h / 2.0);
        d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
    }

    if debug.is_some() {
        for (boundary, state) in boxes.iter() {
            let (x, y, w, h) = boundary.as_rect();
            let color = if state.is_some_and(CollisionState::is_touching) {
                Color::LIME
            } else {
                Color::RED
            };
            d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, color);
        }
        if let Ok(vitals) = player.single() {
            d.draw_text(
                &format!("LIFE {}  RINGS {}", vitals.life, vitals.rings),
                10,
                10,
                20,
                Color::YELLOW,
            );
        }
        d.draw_text(
            &format!("QUEUE {}/{}", queue.len(), queue.capacity()),
            10,
            34,
            20,
            Color::YELLOW,
        );
        d.draw_fps(10, 58);
    }
}
