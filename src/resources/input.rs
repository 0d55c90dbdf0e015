//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reacts to: arrows steer the player, Escape
//! quits and F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    pub active: bool,
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Default::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_UP),
            down: BoolState::bound(KeyboardKey::KEY_DOWN),
            left: BoolState::bound(KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// True while any arrow key is held.
    pub fn any_direction(&self) -> bool {
        self.up.active || self.down.active || self.left.active || self.right.active
    }

    /// Steering direction as -1/0/+1 per axis; opposite keys cancel.
    pub fn direction(&self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        (
            axis(self.left.active, self.right.active),
            axis(self.up.active, self.down.active),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_with_arrow_bindings() {
        let input = InputState::default();
        assert!(!input.any_direction());
        assert_eq!(input.direction(), (0.0, 0.0));
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::default();
        input.left.active = true;
        input.right.active = true;
        input.down.active = true;
        assert!(input.any_direction());
        assert_eq!(input.direction(), (0.0, 1.0));
    }
}
