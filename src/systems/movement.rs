//! Obstacle scrolling.
//!
//! Obstacles drift left at their own speed. Once the right edge passes
//! `x = 0` the actor reappears just past the right border at a random height
//! that keeps it fully on screen.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn obstacle_motion(
    mut query: Query<(&mut MapPosition, &RigidBody, &Sprite), With<Obstacle>>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut rng: Local<fastrand::Rng>,
) {
    for (mut position, body, sprite) in query.iter_mut() {
        position.pos.x += body.velocity.x * time.time_scale;

        let (half_w, half_h) = sprite.half_extents();
        if position.pos.x + half_w < 0.0 {
            position.pos.x = screen.width() + half_w;
            position.pos.y = random_y(&mut rng, half_h, screen.height());
        }
    }
}

/// Random centre y in `[half_h, height - half_h)`.
pub fn random_y(rng: &mut fastrand::Rng, half_h: f32, height: f32) -> f32 {
    let span = height - 2.0 * half_h;
    if span <= 0.0 {
        return height / 2.0;
    }
    half_h + rng.f32() * span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_y_stays_on_screen() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let y = random_y(&mut rng, 25.0, 800.0);
            assert!((25.0..775.0).contains(&y), "y={y}");
        }
    }

    #[test]
    fn random_y_centres_when_too_tall() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(random_y(&mut rng, 500.0, 800.0), 400.0);
    }
}
