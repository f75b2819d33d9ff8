//! 2D Mathematics for the starfield
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector used for star offsets and screen positions
//! - [`Rect`] - Axis-aligned rectangle used for the spawn exclusion zone

mod vec2;
pub mod rect;

pub use vec2::Vec2;
pub use rect::Rect;
