//! Game-over sequencer systems.
use bevy_ecs::prelude::*;

use crate::components::gameoverbanner::GameOverBanner;
use crate::components::mapposition::MapPosition;
use crate::resources::gameover::{GameOverOverlay, GameOverSequence};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Advance the game-over phase machine by one step. Runs after the event drain.
pub fn game_over_sequencer(
    mut sequence: ResMut<GameOverSequence>,
    mut overlay: ResMut<GameOverOverlay>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    if sequence.is_idle() {
        return;
    }
    let before = sequence.phase;
    sequence.step(time.elapsed_ms, screen.height(), &mut overlay);
    if std::mem::discriminant(&before) != std::mem::discriminant(&sequence.phase) {
        log::debug!("game over phase {:?} -> {:?}", before, sequence.phase);
    }
}

/// Move the banner entity to the overlay's y.
pub fn sync_game_over_banner(
    overlay: Res<GameOverOverlay>,
    mut banner: Query<&mut MapPosition, With<GameOverBanner>>,
) {
    for mut position in banner.iter_mut() {
        if position.pos.y != overlay.y {
            position.pos.y = overlay.y;
        }
    }
}
