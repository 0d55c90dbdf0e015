use bevy_ecs::prelude::Component;

/// Marker for the player-controlled entity. There is exactly one.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// Idle bobbing applied to the player while no arrow key is held.
///
/// The offset added each frame is `sin((now - start_ms) * frequency) * amplitude`.
/// Pressing any arrow restarts the clock.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub amplitude: f32,
    pub frequency: f32,
    pub start_ms: u64,
}

impl Hover {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            start_ms: 0,
        }
    }

    pub fn offset(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed * self.frequency).sin() * self.amplitude
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.start_ms = now_ms;
    }
}
