//! Batched star geometry
//!
//! One fixed-capacity vertex array holds every star quad so the whole field
//! uploads and draws at once. Slot `i` owns vertices `4 * i .. 4 * i + 4` and
//! nothing else.

use crate::pipeline::StarVertex;
use crate::texture::TextureExtent;

/// Vertices per star quad
pub const VERTICES_PER_QUAD: usize = 4;

/// Indices per star quad (two triangles)
pub const INDICES_PER_QUAD: usize = 6;

/// CPU-side vertex buffer with four vertices per star slot
///
/// Allocated once; texture coordinates are stamped at construction and only
/// change when the texture extent changes.
pub struct QuadBuffer {
    vertices: Vec<StarVertex>,
    extent: TextureExtent,
}

impl QuadBuffer {
    /// Allocate `quad_count` quads with texture coordinates for `extent`
    pub fn new(quad_count: usize, extent: TextureExtent) -> Self {
        let mut buffer = Self {
            vertices: vec![StarVertex::default(); quad_count * VERTICES_PER_QUAD],
            extent,
        };
        buffer.stamp_tex_coords();
        buffer
    }

    /// Replace the texture extent and restamp every quad's texture coordinates
    pub fn set_texture_extent(&mut self, extent: TextureExtent) {
        if self.extent != extent {
            self.extent = extent;
            self.stamp_tex_coords();
        }
    }

    fn stamp_tex_coords(&mut self) {
        let corners = self.extent.corners();
        for quad in self.vertices.chunks_exact_mut(VERTICES_PER_QUAD) {
            for (vertex, corner) in quad.iter_mut().zip(corners) {
                vertex.tex_coords = corner;
            }
        }
    }

    /// Number of star slots
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn texture_extent(&self) -> TextureExtent {
        self.extent
    }

    pub fn vertices(&self) -> &[StarVertex] {
        &self.vertices
    }

    /// Raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The four vertices of `slot`
    ///
    /// # Panics
    /// Panics if `slot >= quad_count()`.
    pub fn quad(&self, slot: usize) -> &[StarVertex] {
        let start = slot * VERTICES_PER_QUAD;
        &self.vertices[start..start + VERTICES_PER_QUAD]
    }

    /// Mutable access to the four vertices of `slot`
    ///
    /// # Panics
    /// Panics if `slot >= quad_count()`.
    pub fn quad_mut(&mut self, slot: usize) -> &mut [StarVertex] {
        let start = slot * VERTICES_PER_QUAD;
        &mut self.vertices[start..start + VERTICES_PER_QUAD]
    }
}

/// Index list drawing `quad_count` quads as triangle pairs
///
/// Corners are laid out top-left, top-right, bottom-right, bottom-left.
pub fn quad_indices(quad_count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quad_count * INDICES_PER_QUAD);
    for quad in 0..quad_count as u32 {
        let base = quad * VERTICES_PER_QUAD as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let buffer = QuadBuffer::new(10, TextureExtent::new(8, 8).unwrap());
        assert_eq!(buffer.quad_count(), 10);
        assert_eq!(buffer.vertex_count(), 40);
        assert_eq!(buffer.as_bytes().len(), 40 * std::mem::size_of::<StarVertex>());
    }

    #[test]
    fn test_tex_coords_stamped() {
        let buffer = QuadBuffer::new(3, TextureExtent::new(32, 16).unwrap());
        for slot in 0..3 {
            let quad = buffer.quad(slot);
            assert_eq!(quad[0].tex_coords, [0.0, 0.0]);
            assert_eq!(quad[1].tex_coords, [32.0, 0.0]);
            assert_eq!(quad[2].tex_coords, [32.0, 16.0]);
            assert_eq!(quad[3].tex_coords, [0.0, 16.0]);
        }
    }

    #[test]
    fn test_restamp_on_extent_change() {
        let mut buffer = QuadBuffer::new(2, TextureExtent::new(4, 4).unwrap());
        buffer.set_texture_extent(TextureExtent::new(64, 128).unwrap());
        assert_eq!(buffer.quad(1)[2].tex_coords, [64.0, 128.0]);
        assert_eq!(buffer.texture_extent().height(), 128);
    }

    #[test]
    fn test_quad_indices() {
        let indices = quad_indices(2);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert!(quad_indices(0).is_empty());
    }
}
