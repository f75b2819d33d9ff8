//! Star projection - bridges the star field to the quad buffer
//!
//! Each star becomes a square sprite centred on `offset / depth` with radius
//! `radius / depth`, shaded from white at the near plane to black at the far
//! plane. Positions are relative to the viewport centre; the sprite pipeline
//! applies the centring translation once for the whole buffer.

use starfield_core::{Star, StarConfig, StarField};

use crate::pipeline::StarVertex;
use crate::quad_buffer::QuadBuffer;

/// Projects stars into screen-space quads
#[derive(Debug, Clone, Copy)]
pub struct GeometryProjector {
    near: f32,
    far: f32,
    radius: f32,
}

impl GeometryProjector {
    /// Create a projector from the planes and sprite radius in `config`
    pub fn new(config: &StarConfig) -> Self {
        Self {
            near: config.near,
            far: config.far,
            radius: config.radius,
        }
    }

    /// Perspective scale at `depth`
    #[inline]
    pub fn perspective_scale(depth: f32) -> f32 {
        1.0 / depth
    }

    /// Grayscale intensity at `depth`: 255 at the near plane, 0 at the far plane
    #[inline]
    pub fn brightness(&self, depth: f32) -> u8 {
        let depth_ratio = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        ((1.0 - depth_ratio) * 255.0).round() as u8
    }

    /// Write the quad for `star` into `slot` of `buffer`
    ///
    /// Only positions and colors are written; texture coordinates were set
    /// when the buffer was created. No other slot is touched.
    pub fn project(&self, star: &Star, slot: usize, buffer: &mut QuadBuffer) {
        let scale = Self::perspective_scale(star.depth());
        let p = star.offset() * scale;
        let r = self.radius * scale;
        let color = StarVertex::gray(self.brightness(star.depth()));

        let corners = [
            [p.x - r, p.y - r],
            [p.x + r, p.y - r],
            [p.x + r, p.y + r],
            [p.x - r, p.y + r],
        ];

        for (vertex, position) in buffer.quad_mut(slot).iter_mut().zip(corners) {
            vertex.position = position;
            vertex.color = color;
        }
    }

    /// Project the whole field, furthest star first
    ///
    /// Slot `i` receives the star at `(i + furthest) % len`.
    ///
    /// # Panics
    /// Panics if `buffer` has fewer slots than `field` has stars.
    pub fn project_field(&self, field: &StarField, buffer: &mut QuadBuffer) {
        assert!(
            buffer.quad_count() >= field.len(),
            "quad buffer holds {} quads but the field has {} stars",
            buffer.quad_count(),
            field.len()
        );
        for (slot, star) in field.ring() {
            self.project(star, slot, buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureExtent;
    use starfield_core::{DepthScheduler, FieldGenerator, Vec2};

    fn config() -> StarConfig {
        StarConfig::default()
            .with_viewport(100.0, 100.0)
            .with_depth_range(1.0, 11.0)
            .with_radius(10.0)
            .with_spawn_scale(4.0)
    }

    fn buffer(quads: usize) -> QuadBuffer {
        QuadBuffer::new(quads, TextureExtent::new(16, 16).unwrap())
    }

    #[test]
    fn test_quad_corners() {
        let projector = GeometryProjector::new(&config());
        let mut buf = buffer(1);
        projector.project(&Star::new(Vec2::new(20.0, -40.0), 2.0), 0, &mut buf);

        // scale 0.5: centre (10, -20), radius 5
        let quad = buf.quad(0);
        assert_eq!(quad[0].position, [5.0, -25.0]);
        assert_eq!(quad[1].position, [15.0, -25.0]);
        assert_eq!(quad[2].position, [15.0, -15.0]);
        assert_eq!(quad[3].position, [5.0, -15.0]);
    }

    #[test]
    fn test_brightness_endpoints() {
        let projector = GeometryProjector::new(&config());
        assert_eq!(projector.brightness(1.0), 255);
        assert_eq!(projector.brightness(11.0), 0);
        assert_eq!(projector.brightness(6.0), 128);
    }

    #[test]
    fn test_brightness_monotonic() {
        let projector = GeometryProjector::new(&config());
        let mut previous = u8::MAX;
        for i in 0..=1000 {
            let depth = 1.0 + i as f32 * 0.01;
            let b = projector.brightness(depth);
            assert!(b <= previous, "brightness rose at depth {}", depth);
            previous = b;
        }
    }

    #[test]
    fn test_perspective_scale_decreasing() {
        let mut previous = f32::INFINITY;
        for i in 1..=1000 {
            let scale = GeometryProjector::perspective_scale(0.1 + i as f32 * 0.01);
            assert!(scale < previous);
            previous = scale;
        }
    }

    #[test]
    fn test_color_shared_by_all_corners() {
        let projector = GeometryProjector::new(&config());
        let mut buf = buffer(1);
        projector.project(&Star::new(Vec2::new(1.0, 1.0), 3.5), 0, &mut buf);

        let expected = StarVertex::gray(projector.brightness(3.5));
        for vertex in buf.quad(0) {
            assert_eq!(vertex.color, expected);
        }
    }

    #[test]
    fn test_slot_isolation() {
        let projector = GeometryProjector::new(&config());
        let mut buf = buffer(3);
        let before: Vec<StarVertex> = buf.vertices().to_vec();

        projector.project(&Star::new(Vec2::new(50.0, 50.0), 1.5), 1, &mut buf);

        assert_eq!(buf.quad(0), &before[0..4]);
        assert_eq!(buf.quad(2), &before[8..12]);
        assert_ne!(buf.quad(1), &before[4..8]);
    }

    #[test]
    fn test_tex_coords_untouched() {
        let projector = GeometryProjector::new(&config());
        let mut buf = buffer(1);
        for depth in [1.0, 4.0, 10.9] {
            projector.project(&Star::new(Vec2::new(3.0, 4.0), depth), 0, &mut buf);
            let quad = buf.quad(0);
            assert_eq!(quad[0].tex_coords, [0.0, 0.0]);
            assert_eq!(quad[2].tex_coords, [16.0, 16.0]);
        }
    }

    #[test]
    #[should_panic(expected = "quad buffer holds 4 quads but the field has 8 stars")]
    fn test_project_field_short_buffer_panics() {
        let config = config().with_count(8);
        let field = FieldGenerator::new(&config)
            .unwrap()
            .generate_seeded(8, config.spawn_scale, 1)
            .unwrap();
        let mut buf = buffer(4);
        GeometryProjector::new(&config).project_field(&field, &mut buf);
    }

    #[test]
    fn test_project_field_back_to_front() {
        let config = config().with_count(64).with_speed(40.0);
        let field_gen = FieldGenerator::new(&config).unwrap();
        let mut field = field_gen.generate_seeded(64, config.spawn_scale, 3).unwrap();
        let scheduler = DepthScheduler::new(&config);
        let projector = GeometryProjector::new(&config);
        let mut buf = buffer(64);

        for _ in 0..50 {
            scheduler.advance(&mut field, config.speed, config.frame_interval);
        }
        projector.project_field(&field, &mut buf);

        // Slot 0 holds the furthest star, so it is the dimmest
        let first = buf.quad(0)[0].color[0];
        for slot in 0..64 {
            assert!(buf.quad(slot)[0].color[0] >= first);
        }
    }
}
