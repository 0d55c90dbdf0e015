//! Player steering.
//!
//! Arrow keys accelerate the player. With no arrow held the player bobs in
//! place. Friction then damps the velocity, the position integrates it and
//! the centre is clamped so the sprite stays fully inside the window.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{Hover, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &mut Hover, &Sprite), With<Player>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let Ok((mut position, mut body, mut hover, sprite)) = query.single_mut() else {
        return;
    };
    let now = time.elapsed_ms;
    let scale = time.time_scale;

    if input.any_direction() {
        let (dx, dy) = input.direction();
        body.velocity.x += dx * body.acceleration;
        body.velocity.y += dy * body.acceleration;
        hover.restart(now);
    } else {
        position.pos.y += hover.offset(now);
    }

    body.damp(scale);
    position.pos = position.pos + body.velocity.scale_by(scale);

    let (half_w, half_h) = sprite.half_extents();
    position.pos.x = clamp_axis(position.pos.x, half_w, screen.width() - half_w);
    position.pos.y = clamp_axis(position.pos.y, half_h, screen.height() - half_h);
}

/// Clamp that tolerates a sprite larger than the window.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_axis_keeps_inside() {
        assert_eq!(clamp_axis(-5.0, 10.0, 90.0), 10.0);
        assert_eq!(clamp_axis(95.0, 10.0, 90.0), 90.0);
        assert_eq!(clamp_axis(50.0, 10.0, 90.0), 50.0);
    }

    #[test]
    fn clamp_axis_centres_oversized_sprite() {
        assert_eq!(clamp_axis(0.0, 60.0, 40.0), 50.0);
    }
}
