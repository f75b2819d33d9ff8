//! Starfield Rendering Library
//!
//! This crate turns a [`StarField`](starfield_core::StarField) into a single
//! batched vertex buffer and draws it with wgpu.
//!
//! ## Key Components
//!
//! - [`projector::GeometryProjector`] - Perspective projection of one star into a quad
//! - [`quad_buffer::QuadBuffer`] - Fixed-capacity CPU vertex buffer, four vertices per star
//! - [`texture::StarTexture`] - Sprite texture upload and extent
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::SpritePipeline`] - Textured quad rendering in a single draw call

pub mod context;
pub mod pipeline;
pub mod projector;
pub mod quad_buffer;
pub mod texture;

pub use projector::GeometryProjector;
pub use quad_buffer::{QuadBuffer, quad_indices, VERTICES_PER_QUAD, INDICES_PER_QUAD};
pub use texture::{StarTexture, TextureExtent, TextureError, procedural_sprite};

// Re-export core types for convenience
pub use starfield_core::{Star, StarField, StarConfig};
