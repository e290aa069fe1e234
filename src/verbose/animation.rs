//! The cycling status-line glyph.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::verbose::VerboseConfig;

/// A fixed, finite sequence of glyphs with an internal cursor.
///
/// [`next`](AnimationCycle::next) returns the current frame and advances the
/// cursor by exactly one position, wrapping after the last frame. The
/// cursor is atomic so the cycle can be shared without a lock; callers
/// never see or reset its position.
pub struct AnimationCycle {
    frames: Vec<Arc<str>>,
    cursor: AtomicUsize,
}

impl AnimationCycle {
    /// Creates a cycle over `frames`, starting at the first one.
    ///
    /// An empty list falls back to the default frames so `next()` always
    /// has something to return.
    pub fn new(frames: Vec<Arc<str>>) -> Self {
        let frames = if frames.is_empty() {
            VerboseConfig::default_frames()
        } else {
            frames
        };
        Self {
            frames,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of frames in the cycle.
    pub fn period(&self) -> usize {
        self.frames.len()
    }

    /// Returns the current frame and advances one position, wrapping.
    pub fn next(&self) -> Arc<str> {
        let at = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.frames[at % self.frames.len()].clone()
    }
}

impl Default for AnimationCycle {
    fn default() -> Self {
        Self::new(VerboseConfig::default_frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(names: &[&str]) -> Vec<Arc<str>> {
        names.iter().copied().map(Arc::from).collect()
    }

    #[test]
    fn test_advances_one_position_per_call() {
        let cycle = AnimationCycle::new(frames(&["a", "b", "c"]));
        assert_eq!(&*cycle.next(), "a");
        assert_eq!(&*cycle.next(), "b");
        assert_eq!(&*cycle.next(), "c");
    }

    #[test]
    fn test_wraps_after_period() {
        let cycle = AnimationCycle::new(frames(&["a", "b", "c"]));
        for _ in 0..cycle.period() {
            cycle.next();
        }
        assert_eq!(&*cycle.next(), "a");
    }

    #[test]
    fn test_empty_frames_fall_back_to_default() {
        let cycle = AnimationCycle::new(Vec::new());
        assert_eq!(cycle.period(), 4);
        assert_eq!(&*cycle.next(), "\u{25DC}");
    }
}
