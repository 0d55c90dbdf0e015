//! Frame-cycling animation state.
//!
//! The accumulator collects elapsed milliseconds; once it reaches the frame
//! delay the sprite advances one frame and the delay is subtracted, so
//! leftover time carries into the next frame.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteAnimation {
    pub frame_count: usize,
    pub frame_delay_ms: u32,
    pub accumulator_ms: u32,
}

impl SpriteAnimation {
    pub fn new(frame_count: usize, frame_delay_ms: u32) -> Self {
        Self {
            frame_count,
            frame_delay_ms,
            accumulator_ms: 0,
        }
    }

    /// Accumulate `delta_ms` and return the next frame index.
    ///
    /// Single-frame or zero-delay animations never advance.
    pub fn advance(&mut self, current_frame: usize, delta_ms: u32) -> usize {
        if self.frame_count <= 1 || self.frame_delay_ms == 0 {
            return current_frame;
        }
        self.accumulator_ms += delta_ms;
        if self.accumulator_ms >= self.frame_delay_ms {
            self.accumulator_ms -= self.frame_delay_ms;
            (current_frame + 1) % self.frame_count
        } else {
            current_frame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_after_delay_and_keeps_remainder() {
        let mut anim = SpriteAnimation::new(4, 100);
        assert_eq!(anim.advance(0, 60), 0);
        assert_eq!(anim.advance(0, 60), 1);
        assert_eq!(anim.accumulator_ms, 20);
    }

    #[test]
    fn wraps_to_first_frame() {
        let mut anim = SpriteAnimation::new(2, 10);
        assert_eq!(anim.advance(1, 10), 0);
    }

    #[test]
    fn static_sprite_never_advances() {
        let mut anim = SpriteAnimation::new(1, 0);
        assert_eq!(anim.advance(0, 1000), 0);
        assert_eq!(anim.accumulator_ms, 0);
    }
}
