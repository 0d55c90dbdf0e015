//! Game-over sequencer state.
//!
//! The sequence runs as a phase machine advanced exactly once per frame by
//! [`game_over_sequencer`](crate::systems::gameover::game_over_sequencer):
//! `Idle -> Animating -> Complete -> DelayedReset -> Reset -> Idle`.
//! The banner slides from the bottom of the window up to its target, holds
//! for [`GAME_OVER_RESET_DELAY_MS`], then hides again.

use bevy_ecs::prelude::Resource;

use crate::resources::worldtime::time_scale_factor;

pub const GAME_OVER_SPEED: f32 = 2.0;
pub const GAME_OVER_RESET_DELAY_MS: u64 = 3000;
/// How far below the window the hidden banner rests.
pub const GAME_OVER_OFFSCREEN_MARGIN: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverAnimation {
    pub current_y: f32,
    pub target_y: f32,
    /// Pixels per 16 ms frame.
    pub speed: f32,
    pub last_update: u64,
}

impl GameOverAnimation {
    pub fn new(start_y: f32, target_y: f32, speed: f32, now: u64) -> Self {
        Self {
            current_y: start_y,
            target_y,
            speed,
            last_update: now,
        }
    }

    pub fn is_done(&self) -> bool {
        self.current_y <= self.target_y
    }

    /// Move up by `speed` scaled to the time since the last step.
    pub fn step(&mut self, now: u64) {
        let delta = now.saturating_sub(self.last_update);
        let scale = time_scale_factor(u32::try_from(delta).unwrap_or(u32::MAX));
        self.current_y -= self.speed * scale;
        self.last_update = now;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GameOverPhase {
    #[default]
    Idle,
    Animating(GameOverAnimation),
    Complete { target_y: f32 },
    DelayedReset { deadline: u64 },
    Reset,
}

/// Where the banner should be drawn, and whether at all.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GameOverOverlay {
    pub y: f32,
    pub is_active: bool,
}

impl GameOverOverlay {
    pub fn hidden(window_height: f32) -> Self {
        Self {
            y: window_height + GAME_OVER_OFFSCREEN_MARGIN,
            is_active: false,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct GameOverSequence {
    pub phase: GameOverPhase,
}

impl GameOverSequence {
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GameOverPhase::Idle)
    }

    /// Arm the sequence. Ignored (returns `false`) unless idle.
    pub fn start(&mut self, anim: GameOverAnimation) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = GameOverPhase::Animating(anim);
        true
    }

    /// Advance one phase step at time `now`, updating `overlay`.
    pub fn step(&mut self, now: u64, window_height: f32, overlay: &mut GameOverOverlay) {
        self.phase = match self.phase {
            GameOverPhase::Idle => GameOverPhase::Idle,
            GameOverPhase::Animating(mut anim) => {
                if anim.is_done() {
                    GameOverPhase::Complete {
                        target_y: anim.target_y,
                    }
                } else {
                    anim.step(now);
                    overlay.y = anim.current_y;
                    overlay.is_active = true;
                    GameOverPhase::Animating(anim)
                }
            }
            GameOverPhase::Complete { target_y } => {
                overlay.y = target_y;
                overlay.is_active = true;
                GameOverPhase::DelayedReset {
                    deadline: now + GAME_OVER_RESET_DELAY_MS,
                }
            }
            GameOverPhase::DelayedReset { deadline } => {
                if now >= deadline {
                    GameOverPhase::Reset
                } else {
                    GameOverPhase::DelayedReset { deadline }
                }
            }
            GameOverPhase::Reset => {
                *overlay = GameOverOverlay::hidden(window_height);
                GameOverPhase::Idle
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 800.0;

    #[test]
    fn start_is_ignored_while_running() {
        let mut seq = GameOverSequence::default();
        assert!(seq.start(GameOverAnimation::new(H, 400.0, 2.0, 0)));
        assert!(!seq.start(GameOverAnimation::new(H, 100.0, 2.0, 5)));
        match seq.phase {
            GameOverPhase::Animating(anim) => assert_eq!(anim.target_y, 400.0),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn animation_moves_by_scaled_speed() {
        let mut seq = GameOverSequence::default();
        let mut overlay = GameOverOverlay::hidden(H);
        seq.start(GameOverAnimation::new(H, 400.0, 2.0, 0));
        seq.step(32, H, &mut overlay);
        assert!(overlay.is_active);
        assert!((overlay.y - (H - 4.0)).abs() < 1e-4);
    }

    #[test]
    fn completes_then_waits_then_resets() {
        let mut seq = GameOverSequence::default();
        let mut overlay = GameOverOverlay::hidden(H);
        // Already at the target: the first step completes.
        seq.start(GameOverAnimation::new(400.0, 400.0, 2.0, 0));
        seq.step(16, H, &mut overlay);
        assert_eq!(seq.phase, GameOverPhase::Complete { target_y: 400.0 });

        seq.step(32, H, &mut overlay);
        assert_eq!(overlay.y, 400.0);
        assert!(overlay.is_active);
        assert_eq!(seq.phase, GameOverPhase::DelayedReset { deadline: 3032 });

        seq.step(3031, H, &mut overlay);
        assert_eq!(seq.phase, GameOverPhase::DelayedReset { deadline: 3032 });

        seq.step(3032, H, &mut overlay);
        assert_eq!(seq.phase, GameOverPhase::Reset);
        assert!(overlay.is_active);

        seq.step(3048, H, &mut overlay);
        assert!(seq.is_idle());
        assert!(!overlay.is_active);
        assert_eq!(overlay.y, H + GAME_OVER_OFFSCREEN_MARGIN);
    }

    #[test]
    fn idle_step_leaves_overlay_alone() {
        let mut seq = GameOverSequence::default();
        let mut overlay = GameOverOverlay::hidden(H);
        seq.step(100, H, &mut overlay);
        assert_eq!(overlay, GameOverOverlay::hidden(H));
    }
}
