//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! once per frame, before the gameplay schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the game clock by `dt_ms` milliseconds.
pub fn update_world_time(world: &mut World, dt_ms: u32) {
    world.resource_mut::<WorldTime>().advance(dt_ms);
}

/// Convert raylib's frame time in seconds to whole milliseconds.
pub fn frame_time_ms(seconds: f32) -> u32 {
    (seconds.max(0.0) * 1000.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_time_rounds_to_ms() {
        assert_eq!(frame_time_ms(0.0166), 17);
        assert_eq!(frame_time_ms(-1.0), 0);
    }

    #[test]
    fn world_time_advances() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 16);
        update_world_time(&mut world, 16);
        let t = world.resource::<WorldTime>();
        assert_eq!(t.elapsed_ms, 32);
        assert_eq!(t.time_scale, 1.0);
    }
}
