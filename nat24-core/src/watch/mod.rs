//! Watch face orchestration
//!
//! [`WatchFace`] is the single owner of the clock state, the render scale
//! and the entrance animator. Hosts feed it [`FaceEvent`]s and ask it to
//! render; it tracks which layers changed in between.

pub mod events;
pub mod face;

pub use events::{FaceEvent, Layers};
pub use face::{Entrance, Layout, WatchFace, MAX_ANIMATIONS};
