use bevy_ecs::prelude::Resource;

/// Frame period the per-frame movement constants are tuned for.
pub const REFERENCE_FRAME_MS: f32 = 16.0;

/// Scale factor for per-frame constants given the real frame delta.
pub fn time_scale_factor(delta_ms: u32) -> f32 {
    delta_ms as f32 / REFERENCE_FRAME_MS
}

/// Monotonic game clock in milliseconds.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed_ms: u64,
    pub delta_ms: u32,
    /// `delta_ms / 16`, refreshed with the clock.
    pub time_scale: f32,
    pub frame_count: u64,
}

impl WorldTime {
    pub fn advance(&mut self, delta_ms: u32) {
        self.delta_ms = delta_ms;
        self.elapsed_ms += delta_ms as u64;
        self.time_scale = time_scale_factor(delta_ms);
        self.frame_count += 1;
    }
}
