//! GPU-compatible data types for the sprite pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// One corner of a star quad
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    /// Position relative to the viewport centre, in pixels
    pub position: [f32; 2],
    /// Texture coordinate in texels (normalized in the shader)
    pub tex_coords: [f32; 2],
    /// RGBA color, multiplied with the sampled texel
    pub color: [u8; 4],
}

impl StarVertex {
    /// Opaque gray of the given intensity
    #[inline]
    pub fn gray(value: u8) -> [u8; 4] {
        [value, value, value, 255]
    }
}

/// Render transform for the sprite pass
/// Layout: 16 bytes total (must match sprite.wgsl SpriteUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteUniforms {
    /// Surface size in pixels
    pub viewport: [f32; 2],
    /// Translation applied to every vertex (half the viewport)
    pub translation: [f32; 2],
}

impl SpriteUniforms {
    /// Uniforms that centre star space on a surface of `width` x `height`
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            viewport: [width, height],
            translation: [width * 0.5, height * 0.5],
        }
    }
}

impl Default for SpriteUniforms {
    fn default() -> Self {
        Self::centered(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_star_vertex_size() {
        // 2 floats position + 2 floats tex_coords + 4 bytes color = 20 bytes
        assert_eq!(size_of::<StarVertex>(), 20);
    }

    #[test]
    fn test_sprite_uniforms_size() {
        assert_eq!(size_of::<SpriteUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<StarVertex>(), 4);
        assert_eq!(std::mem::align_of::<SpriteUniforms>(), 4);
    }

    #[test]
    fn test_centered_translation() {
        let u = SpriteUniforms::centered(1920.0, 1080.0);
        assert_eq!(u.translation, [960.0, 540.0]);
        assert_eq!(u.viewport, [1920.0, 1080.0]);
    }
}
