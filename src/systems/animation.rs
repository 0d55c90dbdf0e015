use bevy_ecs::prelude::*;

use crate::components::animation::SpriteAnimation;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Cycle sprite frames by elapsed time.
pub fn animation(mut query: Query<(&mut Sprite, &mut SpriteAnimation)>, time: Res<WorldTime>) {
    for (mut sprite, mut anim) in query.iter_mut() {
        let next = anim.advance(sprite.current_frame, time.delta_ms);
        if next != sprite.current_frame {
            sprite.current_frame = next;
        }
    }
}
