//! Core simulation for the starfield
//!
//! This crate holds everything that decides where stars are and how far away
//! they are. It has no knowledge of windows or GPUs.
//!
//! - [`StarConfig`] - Immutable simulation parameters
//! - [`Star`] / [`StarField`] - Fixed-size star storage with a furthest-star cursor
//! - [`FieldGenerator`] - Seeded initial placement with a central exclusion zone
//! - [`DepthScheduler`] - Per-tick depth advance and far-plane recycling
//! - [`StarfieldError`] - Configuration and generation failures

mod config;
mod error;
mod star;
mod generator;
mod scheduler;

pub use config::StarConfig;
pub use error::StarfieldError;
pub use star::{Star, StarField, RingIter};
pub use generator::{FieldGenerator, DEFAULT_MAX_ATTEMPTS};
pub use scheduler::DepthScheduler;

// Re-export math types for convenience
pub use starfield_math::{Vec2, Rect};
