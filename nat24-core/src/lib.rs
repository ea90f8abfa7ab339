//! Board-agnostic core logic for the nat24 watch face
//!
//! This crate contains everything that does not depend on a concrete
//! display or time source:
//!
//! - Fixed-point angle model (hour/minute to turn fractions)
//! - Entrance animation driver (eased timelines, activity tracking)
//! - Radial geometry helpers
//! - Face and indicator renderers over the [`traits::Canvas`] seam
//! - The [`watch::WatchFace`] that owns the state and coalesces redraws
//! - Face configuration types and a small TOML subset parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod angle;
pub mod anim;
pub mod config;
pub mod geometry;
pub mod render;
pub mod traits;
pub mod watch;
