//! Per-tick depth advance
//!
//! Every star moves toward the viewer by `speed * dt`. A star that reaches the
//! near plane is sent back to the far plane carrying its overshoot, so spacing
//! between stars stays what linear motion would give without the wrap.

use crate::{StarConfig, StarField};

/// Advances star depths and recycles stars that pass the near plane
#[derive(Debug, Clone, Copy)]
pub struct DepthScheduler {
    near: f32,
    far: f32,
}

impl DepthScheduler {
    /// Create a scheduler for the planes in `config`
    pub fn new(config: &StarConfig) -> Self {
        Self::with_planes(config.near, config.far)
    }

    /// Create a scheduler for explicit planes (`0 < near < far`)
    pub fn with_planes(near: f32, far: f32) -> Self {
        debug_assert!(near > 0.0 && near < far);
        Self { near, far }
    }

    /// Move every star `speed * dt` closer and recycle those past the near plane
    ///
    /// Stars are visited in reverse ring order, from the closest star back to
    /// the furthest. When several recycle in the same tick the one processed
    /// last had the smallest overshoot, so it lands furthest away. Its index
    /// becomes the field's furthest cursor and is returned.
    ///
    /// Stars only ever move toward the viewer: a negative or NaN step is
    /// treated as zero.
    pub fn advance(&self, field: &mut StarField, speed: f32, dt: f32) -> Option<usize> {
        let step = (speed * dt).max(0.0);
        if step == 0.0 {
            return None;
        }

        let len = field.len();
        let start = field.furthest_index();
        let stars = field.stars_mut();
        let mut recycled = None;

        for slot in (0..len).rev() {
            let index = (slot + start) % len;
            let star = &mut stars[index];
            let depth = star.depth - step;
            if depth <= self.near {
                star.depth = self.recycle(depth);
                recycled = Some(index);
            } else {
                star.depth = depth;
            }
        }

        if let Some(index) = recycled {
            log::trace!("Star {} is now furthest", index);
            field.set_furthest(index);
        }
        recycled
    }

    /// Map a depth at or past the near plane back into `(near, far]`
    ///
    /// A star at `near - e` lands at `far - e`. Overshoots longer than the
    /// depth range wrap modulo the range; an infinite overshoot lands on the
    /// far plane.
    #[inline]
    pub fn recycle(&self, depth: f32) -> f32 {
        if depth > self.near {
            return depth;
        }
        let overshoot = (self.near - depth).rem_euclid(self.far - self.near);
        let wrapped = self.far - overshoot;
        // rem_euclid may round up to the full range
        if wrapped.is_finite() && wrapped > self.near {
            wrapped
        } else {
            self.far
        }
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }
}
