use bevy_ecs::prelude::Component;

/// Marker for the "GAME OVER" banner entity.
///
/// Its position is driven by the game-over overlay, not by physics.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct GameOverBanner;

/// Resting y for scripted motion. The banner slides up to it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TargetY(pub f32);
