//! Display support for the nat24 watch face
//!
//! Bridges the core [`Canvas`](nat24_core::traits::Canvas) seam onto any
//! `embedded_graphics::DrawTarget`:
//!
//! - [`GraphicsCanvas`]: canvas over a draw target
//! - [`Palette`]: maps face colors to the target's pixel color
//! - [`draw_label`]: the time text below the face

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod label;
pub mod palette;

pub use canvas::GraphicsCanvas;
pub use label::{draw_label, LABEL_FONT};
pub use palette::{MonoPalette, Palette, Rgb565Palette};
