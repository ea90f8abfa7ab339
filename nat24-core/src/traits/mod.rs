//! Host abstraction traits
//!
//! These traits define the interface between the watch face logic and the
//! drawing surface provided by the host.

pub mod canvas;

pub use canvas::{Canvas, CanvasExt, Color};
