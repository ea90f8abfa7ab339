//! Entrance animation driver
//!
//! Animations are polled state machines. The [`Animator`] owns a fixed set
//! of them, advances them against a millisecond clock and reports progress
//! to an [`AnimationHandler`]. Animations scheduled with lifecycle
//! notification also drive the shared [`Activity`] flag.

pub mod activity;
pub mod animation;
pub mod animator;
pub mod curve;

pub use activity::{Activity, ActivityMode};
pub use animation::{Animation, AnimationSpec, Frame, Phase};
pub use animator::{AnimationError, AnimationHandler, Animator};
pub use curve::{percentage_of, AnimationProgress, Curve, ANIMATION_NORMALIZED_MAX};
