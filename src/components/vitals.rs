use bevy_ecs::prelude::Component;

/// Life and ring counters. Both are clamped at zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vitals {
    pub life: i32,
    pub rings: i32,
}

impl Vitals {
    pub fn new(life: i32, rings: i32) -> Self {
        Self { life, rings }
    }

    /// Apply a life delta, clamp at zero and return the new value.
    pub fn apply_life_delta(&mut self, delta: i32) -> i32 {
        self.life = (self.life + delta).max(0);
        self.life
    }

    /// Apply a ring delta, clamp at zero and return the new value.
    pub fn apply_ring_delta(&mut self, delta: i32) -> i32 {
        self.rings = (self.rings + delta).max(0);
        self.rings
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }
}
