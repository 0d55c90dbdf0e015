//! Input systems.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame and
//! writes [`InputState`]. Pressing the debug key triggers
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    let input = &mut *input;
    for state in [
        &mut input.up,
        &mut input.down,
        &mut input.left,
        &mut input.right,
        &mut input.action_back,
        &mut input.mode_debug,
    ] {
        state.active = is_key_down(state.key_binding);
        state.just_pressed = is_key_pressed(state.key_binding);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
