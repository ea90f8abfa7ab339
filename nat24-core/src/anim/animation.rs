//! A single timed animation

use super::curve::{AnimationProgress, Curve, ANIMATION_NORMALIZED_MAX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing parameters of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationSpec {
    /// Running time after the delay (ms)
    pub duration_ms: u32,
    /// Wait before the first frame (ms)
    pub delay_ms: u32,
    /// Easing applied to progress
    pub curve: Curve,
    /// Report start/stop to the handler and the activity flag
    pub notify_lifecycle: bool,
}

impl AnimationSpec {
    /// An animation starting immediately without lifecycle notification
    pub const fn new(duration_ms: u32, curve: Curve) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            curve,
            notify_lifecycle: false,
        }
    }

    /// Set the start delay
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Enable lifecycle notification
    pub const fn with_lifecycle(mut self) -> Self {
        self.notify_lifecycle = true;
        self
    }
}

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Scheduled, delay not yet elapsed
    Pending,
    /// At least one frame delivered
    Running,
    /// Final frame delivered
    Completed,
}

/// Result of advancing an animation that produced a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Eased progress for this frame
    pub progress: AnimationProgress,
    /// This is the first frame
    pub started: bool,
    /// This is the last frame (`progress == ANIMATION_NORMALIZED_MAX`)
    pub finished: bool,
}

/// A polled animation timeline
///
/// `advance` maps wall time to eased progress. Progress never decreases,
/// even if the clock handed in does, and the final frame always carries
/// exactly [`ANIMATION_NORMALIZED_MAX`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    spec: AnimationSpec,
    scheduled_at_ms: u64,
    phase: Phase,
    last_progress: AnimationProgress,
}

impl Animation {
    /// Schedule an animation at `now_ms`
    pub fn new(spec: AnimationSpec, now_ms: u64) -> Self {
        Self {
            spec,
            scheduled_at_ms: now_ms,
            phase: Phase::Pending,
            last_progress: 0,
        }
    }

    /// Timing parameters
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the final frame has been delivered
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Advance to `now_ms`
    ///
    /// Returns `None` while the delay is pending and after completion.
    pub fn advance(&mut self, now_ms: u64) -> Option<Frame> {
        if self.phase == Phase::Completed {
            return None;
        }

        let elapsed = now_ms.saturating_sub(self.scheduled_at_ms);
        let delay = self.spec.delay_ms as u64;
        if elapsed < delay {
            return None;
        }

        let running = elapsed - delay;
        let duration = self.spec.duration_ms as u64;
        let linear = if running >= duration {
            ANIMATION_NORMALIZED_MAX
        } else {
            (running * ANIMATION_NORMALIZED_MAX as u64 / duration) as AnimationProgress
        };

        let progress = self.spec.curve.apply(linear).max(self.last_progress);
        let started = self.phase == Phase::Pending;
        let finished = linear == ANIMATION_NORMALIZED_MAX;

        self.last_progress = progress;
        self.phase = if finished {
            Phase::Completed
        } else {
            Phase::Running
        };

        Some(Frame {
            progress,
            started,
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_holds_back_frames() {
        let spec = AnimationSpec::new(600, Curve::Linear).with_delay(100);
        let mut anim = Animation::new(spec, 1_000);

        assert_eq!(anim.advance(1_050), None);
        assert_eq!(anim.phase(), Phase::Pending);

        let frame = anim.advance(1_100).unwrap();
        assert!(frame.started);
        assert!(!frame.finished);
        assert_eq!(frame.progress, 0);
        assert_eq!(anim.phase(), Phase::Running);
    }

    #[test]
    fn test_linear_midpoint() {
        let mut anim = Animation::new(AnimationSpec::new(600, Curve::Linear), 0);
        let frame = anim.advance(300).unwrap();
        assert_eq!(frame.progress, ANIMATION_NORMALIZED_MAX / 2);
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut anim = Animation::new(AnimationSpec::new(600, Curve::EaseOut), 0);
        anim.advance(100);

        let frame = anim.advance(700).unwrap();
        assert!(frame.finished);
        assert_eq!(frame.progress, ANIMATION_NORMALIZED_MAX);
        assert!(anim.is_complete());
        assert_eq!(anim.advance(800), None);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut anim = Animation::new(AnimationSpec::new(0, Curve::EaseIn), 0);
        let frame = anim.advance(0).unwrap();
        assert!(frame.started);
        assert!(frame.finished);
        assert_eq!(frame.progress, ANIMATION_NORMALIZED_MAX);
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut anim = Animation::new(AnimationSpec::new(1_000, Curve::Linear), 0);
        let ahead = anim.advance(500).unwrap().progress;
        // Clock going backwards keeps the last value
        let behind = anim.advance(200).unwrap().progress;
        assert_eq!(behind, ahead);
    }

    #[test]
    fn test_monotonic_over_timeline() {
        let spec = AnimationSpec::new(900, Curve::EaseOut).with_delay(50);
        let mut anim = Animation::new(spec, 0);
        let mut last = 0;
        let mut frames = 0;

        for now in (0..1_200).step_by(7) {
            if let Some(frame) = anim.advance(now) {
                assert!(frame.progress >= last);
                last = frame.progress;
                frames += 1;
            }
        }

        assert!(frames > 100);
        assert_eq!(last, ANIMATION_NORMALIZED_MAX);
    }
}
