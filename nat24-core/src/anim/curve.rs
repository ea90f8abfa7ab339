//! Normalized progress and easing curves

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalized animation progress, `0..=ANIMATION_NORMALIZED_MAX`
pub type AnimationProgress = u32;

/// Progress value of a completed animation
pub const ANIMATION_NORMALIZED_MAX: AnimationProgress = 0xffff;

/// Easing curve applied to linear time progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Curve {
    /// Constant speed
    Linear,
    /// Slow start, fast finish (cubic)
    EaseIn,
    /// Fast start, slow finish (cubic)
    #[default]
    EaseOut,
    /// Slow at both ends (cubic)
    EaseInOut,
}

impl Curve {
    /// Shape a linear progress value
    ///
    /// Every curve maps 0 to 0 and `ANIMATION_NORMALIZED_MAX` to itself, and
    /// is monotonically non-decreasing in between.
    pub fn apply(self, linear: AnimationProgress) -> AnimationProgress {
        let t = linear.min(ANIMATION_NORMALIZED_MAX) as u64;
        let max = ANIMATION_NORMALIZED_MAX as u64;

        let eased = match self {
            Curve::Linear => t,
            Curve::EaseIn => cube(t),
            Curve::EaseOut => max - cube(max - t),
            Curve::EaseInOut => {
                if t < max / 2 {
                    4 * cube(t)
                } else {
                    max - 4 * cube(max - t)
                }
            }
        };

        eased as AnimationProgress
    }
}

/// `t³` rescaled so that `cube(MAX) == MAX`
#[inline]
fn cube(t: u64) -> u64 {
    let max = ANIMATION_NORMALIZED_MAX as u64;
    (t * t / max) * t / max
}

/// Scale normalized progress onto `[0, max]`
///
/// Integer arithmetic, truncating toward zero. Progress beyond
/// `ANIMATION_NORMALIZED_MAX` is clamped.
pub fn percentage_of(progress: AnimationProgress, max: i32) -> i32 {
    let progress = progress.min(ANIMATION_NORMALIZED_MAX) as i64;
    (progress * max as i64 / ANIMATION_NORMALIZED_MAX as i64) as i32
}
