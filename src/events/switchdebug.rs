//! Event and observer to toggle the debug overlay.
//!
//! Triggering a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource. The renderer draws collision boxes and counters while it exists.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        log::info!("debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode {});
        log::info!("debug overlay enabled");
    }
}
