//! Rendering pipeline components
//!
//! This module contains the GPU data layouts and the sprite pipeline that
//! draws every star quad in one indexed draw.

pub mod types;
pub mod sprite_pipeline;

// Re-export types
pub use types::{StarVertex, SpriteUniforms};

// Re-export pipelines
pub use sprite_pipeline::SpritePipeline;
