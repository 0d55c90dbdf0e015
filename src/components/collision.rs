//! Per-entity collision state machine.
//!
//! Each actor remembers how it related to the player on the previous frame.
//! Feeding the current overlap result through [`CollisionState::next`] yields
//! an edge-triggered view: `Enter` on the first touching frame, `Stay` while
//! touching, `Exit` on the first frame apart.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionState {
    #[default]
    None,
    Enter,
    Stay,
    Exit,
}

impl CollisionState {
    /// Transition for one frame given whether the boxes overlap now.
    pub fn next(self, overlapping: bool) -> Self {
        match (self, overlapping) {
            (CollisionState::None, true) => CollisionState::Enter,
            (CollisionState::None, false) => CollisionState::None,
            (CollisionState::Enter | CollisionState::Stay, true) => CollisionState::Stay,
            (CollisionState::Enter | CollisionState::Stay, false) => CollisionState::Exit,
            (CollisionState::Exit, true) => CollisionState::Enter,
            (CollisionState::Exit, false) => CollisionState::None,
        }
    }

    pub fn is_touching(&self) -> bool {
        matches!(self, CollisionState::Enter | CollisionState::Stay)
    }
}
