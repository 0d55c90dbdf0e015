//! What touching an actor does to the player.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectKind {
    #[default]
    None,
    /// Costs life and rings.
    Damage,
    /// Ring pickup.
    Ring,
    /// Extra life pickup.
    Life,
}

/// Per-entity effect data read by the collision handlers and the dispatcher.
///
/// The deltas are signed: damage carries negative values, pickups positive.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectDescriptor {
    pub kind: EffectKind,
    pub life_delta: i32,
    pub ring_delta: i32,
}

impl EffectDescriptor {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn damage(life_delta: i32, ring_delta: i32) -> Self {
        Self {
            kind: EffectKind::Damage,
            life_delta,
            ring_delta,
        }
    }

    pub fn ring(ring_delta: i32) -> Self {
        Self {
            kind: EffectKind::Ring,
            life_delta: 0,
            ring_delta,
        }
    }

    pub fn life(life_delta: i32) -> Self {
        Self {
            kind: EffectKind::Life,
            life_delta,
            ring_delta: 0,
        }
    }
}
