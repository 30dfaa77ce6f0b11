//! Sprite-sheet animation driven by wall-clock time.
//!
//! Frames advance independently of the simulation tick: a frame is shown for
//! at least `frame_duration_ms` of real time, however many ticks that spans.

use crate::state::machine::Transient;

/// A sprite sheet plus how to play it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Registry name of the sprite sheet.
    pub sprite: &'static str,
    /// Number of frames laid out left to right.
    pub frame_count: usize,
    /// Minimum time each frame stays on screen.
    pub frame_duration_ms: f64,
}

impl AnimationClip {
    pub const fn new(sprite: &'static str, frame_count: usize, frame_duration_ms: f64) -> Self {
        Self {
            sprite,
            frame_count,
            frame_duration_ms,
        }
    }
}

/// Playback position of an entity's current clip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteAnimation {
    /// Current frame index.
    pub frame_index: usize,
    /// When the frame index last changed.
    pub last_stamp_ms: f64,
}

impl SpriteAnimation {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frame_index: 0,
            last_stamp_ms: now_ms,
        }
    }

    /// Advance one frame if the current one has been shown longer than the
    /// clip's frame duration. Wraps at the clip's frame count.
    /// Returns true if the frame changed.
    pub fn advance(&mut self, now_ms: f64, clip: &AnimationClip) -> bool {
        if now_ms - self.last_stamp_ms <= clip.frame_duration_ms {
            return false;
        }
        self.frame_index += 1;
        if self.frame_index >= clip.frame_count {
            self.frame_index = 0;
        }
        self.last_stamp_ms = now_ms;
        true
    }
}

impl Transient for SpriteAnimation {
    /// Restart the clip from its first frame. The timestamp is kept.
    fn reset(&mut self) {
        self.frame_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALK: AnimationClip = AnimationClip::new("playerWalk", 6, 100.0);

    #[test]
    fn holds_frame_until_duration_exceeded() {
        let mut anim = SpriteAnimation::new(0.0);
        assert!(!anim.advance(50.0, &WALK));
        assert!(!anim.advance(100.0, &WALK));
        assert_eq!(anim.frame_index, 0);
        assert!(anim.advance(101.0, &WALK));
        assert_eq!(anim.frame_index, 1);
        assert_eq!(anim.last_stamp_ms, 101.0);
    }

    #[test]
    fn wraps_at_frame_count() {
        let mut anim = SpriteAnimation::new(0.0);
        let mut now = 0.0;
        for _ in 0..6 {
            now += 150.0;
            anim.advance(now, &WALK);
        }
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn one_step_per_call_even_after_long_gap() {
        let mut anim = SpriteAnimation::new(0.0);
        anim.advance(10_000.0, &WALK);
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn reset_keeps_timestamp() {
        let mut anim = SpriteAnimation::new(0.0);
        anim.advance(200.0, &WALK);
        anim.reset();
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.last_stamp_ms, 200.0);
    }
}
