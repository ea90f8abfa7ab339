//! Fixed-capacity animation scheduler

use heapless::Vec;

use super::activity::{Activity, ActivityMode};
use super::animation::{Animation, AnimationSpec};
use super::curve::AnimationProgress;

/// Animation scheduling errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// No free animation slot
    Full,
}

/// Receiver of animation callbacks
///
/// `K` identifies which animation a callback belongs to.
pub trait AnimationHandler<K> {
    /// New progress for animation `key`
    fn update(&mut self, key: K, progress: AnimationProgress);

    /// A lifecycle-tracked animation delivered its first frame
    fn started(&mut self, _key: K) {}

    /// A lifecycle-tracked animation delivered its last frame
    fn stopped(&mut self, _key: K) {}
}

impl<K, F> AnimationHandler<K> for F
where
    F: FnMut(K, AnimationProgress),
{
    fn update(&mut self, key: K, progress: AnimationProgress) {
        self(key, progress)
    }
}

/// Runs up to `N` animations side by side
///
/// Animations are fire-and-forget: once scheduled they run to completion and
/// are dropped after their final frame. Callbacks are delivered in
/// scheduling order within one `advance` call.
pub struct Animator<K, const N: usize> {
    animations: Vec<(K, Animation), N>,
    activity: Activity,
}

impl<K: Copy, const N: usize> Animator<K, N> {
    /// Create an empty animator
    pub const fn new(mode: ActivityMode) -> Self {
        Self {
            animations: Vec::new(),
            activity: Activity::new(mode),
        }
    }

    /// Schedule an animation starting from `now_ms`
    pub fn schedule(
        &mut self,
        key: K,
        spec: AnimationSpec,
        now_ms: u64,
    ) -> Result<(), AnimationError> {
        self.animations
            .push((key, Animation::new(spec, now_ms)))
            .map_err(|_| AnimationError::Full)
    }

    /// Advance every animation to `now_ms`
    ///
    /// Returns the number of `update` callbacks delivered.
    pub fn advance<H>(&mut self, now_ms: u64, handler: &mut H) -> usize
    where
        H: AnimationHandler<K>,
    {
        let mut updates = 0;

        for (key, animation) in self.animations.iter_mut() {
            let Some(frame) = animation.advance(now_ms) else {
                continue;
            };
            let lifecycle = animation.spec().notify_lifecycle;

            if frame.started && lifecycle {
                self.activity.start();
                handler.started(*key);
            }

            handler.update(*key, frame.progress);
            updates += 1;

            if frame.finished && lifecycle {
                handler.stopped(*key);
                self.activity.stop();
            }
        }

        self.animations.retain(|(_, animation)| !animation.is_complete());
        updates
    }

    /// Check if any animation is pending or running
    pub fn is_running(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Check if a lifecycle-tracked animation is active
    pub fn is_animating(&self) -> bool {
        self.activity.is_active()
    }

    /// Shared activity state
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Number of scheduled animations
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Check if no animation is scheduled
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::curve::{Curve, ANIMATION_NORMALIZED_MAX};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Radius,
        Notch,
        Sweep,
    }

    #[derive(Default)]
    struct Recorder {
        updates: [u32; 3],
        last: [AnimationProgress; 3],
        started: u32,
        stopped: u32,
    }

    impl AnimationHandler<Key> for Recorder {
        fn update(&mut self, key: Key, progress: AnimationProgress) {
            let slot = key as usize;
            assert!(progress >= self.last[slot]);
            self.updates[slot] += 1;
            self.last[slot] = progress;
        }

        fn started(&mut self, _key: Key) {
            self.started += 1;
        }

        fn stopped(&mut self, _key: Key) {
            self.stopped += 1;
        }
    }

    fn entrance(mode: ActivityMode) -> Animator<Key, 4> {
        let mut animator = Animator::new(mode);
        animator
            .schedule(Key::Radius, AnimationSpec::new(600, Curve::EaseOut), 0)
            .unwrap();
        animator
            .schedule(
                Key::Notch,
                AnimationSpec::new(600, Curve::EaseOut).with_delay(100),
                0,
            )
            .unwrap();
        animator
            .schedule(
                Key::Sweep,
                AnimationSpec::new(900, Curve::EaseOut).with_lifecycle(),
                0,
            )
            .unwrap();
        animator
    }

    #[test]
    fn test_single_lifecycle_animation_bounds_activity() {
        let mut animator = entrance(ActivityMode::Flag);
        let mut recorder = Recorder::default();
        let mut was_active = false;
        let mut rises = 0;
        let mut falls = 0;

        for now in (0..1_500).step_by(10) {
            animator.advance(now, &mut recorder);
            let active = animator.is_animating();
            if active && !was_active {
                rises += 1;
                assert_eq!(now, 0);
            }
            if !active && was_active {
                falls += 1;
                assert_eq!(now, 900);
            }
            was_active = active;
        }

        assert_eq!((rises, falls), (1, 1));
        assert_eq!((recorder.started, recorder.stopped), (1, 1));
        assert_eq!(recorder.last, [ANIMATION_NORMALIZED_MAX; 3]);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_radius_and_notch_finish_independently() {
        let mut animator = entrance(ActivityMode::Flag);
        let mut recorder = Recorder::default();

        animator.advance(650, &mut recorder);
        // Radius done, notch and sweep still going
        assert_eq!(animator.len(), 2);
        assert!(animator.is_animating());

        animator.advance(700, &mut recorder);
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn test_overlapping_lifecycles() {
        let sweep = AnimationSpec::new(900, Curve::Linear).with_lifecycle();
        let short = AnimationSpec::new(300, Curve::Linear).with_lifecycle();

        let mut flag: Animator<Key, 2> = Animator::new(ActivityMode::Flag);
        flag.schedule(Key::Sweep, sweep, 0).unwrap();
        flag.schedule(Key::Radius, short, 0).unwrap();

        let mut counted: Animator<Key, 2> = Animator::new(ActivityMode::Counted);
        counted.schedule(Key::Sweep, sweep, 0).unwrap();
        counted.schedule(Key::Radius, short, 0).unwrap();

        let mut sink = |_: Key, _: AnimationProgress| {};
        for now in [0, 300, 600] {
            flag.advance(now, &mut sink);
            counted.advance(now, &mut sink);
        }

        // The short animation's stop cleared the single flag early
        assert!(!flag.is_animating());
        assert!(counted.is_animating());

        counted.advance(900, &mut sink);
        assert!(!counted.is_animating());
    }

    #[test]
    fn test_capacity() {
        let mut animator: Animator<Key, 1> = Animator::new(ActivityMode::Flag);
        let spec = AnimationSpec::new(100, Curve::Linear);
        assert!(animator.schedule(Key::Radius, spec, 0).is_ok());
        assert_eq!(
            animator.schedule(Key::Notch, spec, 0),
            Err(AnimationError::Full)
        );
    }

    #[test]
    fn test_closure_handler() {
        let mut animator: Animator<Key, 1> = Animator::new(ActivityMode::Flag);
        animator
            .schedule(Key::Sweep, AnimationSpec::new(100, Curve::Linear), 0)
            .unwrap();

        let mut seen = 0;
        let delivered = animator.advance(50, &mut |key: Key, progress: AnimationProgress| {
            assert_eq!(key, Key::Sweep);
            seen = progress;
        });

        assert_eq!(delivered, 1);
        assert_eq!(seen, ANIMATION_NORMALIZED_MAX / 2);
    }
}
