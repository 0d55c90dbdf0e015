//! Debug toggle resource.
//!
//! While present the renderer outlines every collision box and prints the
//! player's counters and the event queue fill level.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
