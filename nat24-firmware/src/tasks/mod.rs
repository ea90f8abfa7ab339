//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod clock;
pub mod face;

pub use clock::clock_task;
pub use face::face_task;
