//! Simulation parameters

use starfield_math::{Rect, Vec2};

use crate::StarfieldError;

/// Immutable parameters shared by the generator, scheduler and projector
///
/// Built once at startup and passed by reference into every entry point.
/// Call [`StarConfig::validate`] before generating a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarConfig {
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Number of stars in the field
    pub count: u32,
    /// Closest depth a star can have before it is recycled
    pub near: f32,
    /// Furthest depth a star can have
    pub far: f32,
    /// Sprite radius at depth 1.0, in pixels
    pub radius: f32,
    /// Depth units travelled per second
    pub speed: f32,
    /// Fixed simulation step in seconds
    pub frame_interval: f32,
    /// Spawn area as a multiple of the viewport size
    pub spawn_scale: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1920.0, 1080.0),
            count: 10_000,
            near: 0.1,
            far: 10.0,
            radius: 30.0,
            speed: 0.5,
            frame_interval: 1.0 / 144.0,
            spawn_scale: 10.0,
        }
    }
}

impl StarConfig {
    /// Set the viewport size
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Vec2::new(width, height);
        self
    }

    /// Set the star count
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the near and far planes
    pub fn with_depth_range(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Set the travel speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the fixed simulation step
    pub fn with_frame_interval(mut self, frame_interval: f32) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Set the spawn area multiplier
    pub fn with_spawn_scale(mut self, spawn_scale: f32) -> Self {
        self.spawn_scale = spawn_scale;
        self
    }

    /// Set the sprite radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Check every precondition the generator and scheduler rely on
    pub fn validate(&self) -> Result<(), StarfieldError> {
        if self.count == 0 {
            return Err(StarfieldError::EmptyField);
        }
        if !self.viewport.is_positive() {
            return Err(StarfieldError::InvalidViewport {
                width: self.viewport.x,
                height: self.viewport.y,
            });
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.near < self.far) {
            return Err(StarfieldError::InvalidDepthRange {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(StarfieldError::InvalidRadius(self.radius));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(StarfieldError::InvalidSpeed(self.speed));
        }
        if !(self.frame_interval.is_finite() && self.frame_interval > 0.0) {
            return Err(StarfieldError::InvalidFrameInterval(self.frame_interval));
        }
        if self.step() >= self.depth_range() {
            return Err(StarfieldError::StepTooLarge {
                step: self.step(),
                range: self.depth_range(),
            });
        }
        self.validate_spawn_scale(self.spawn_scale)
    }

    /// Check that `scale` leaves room outside the exclusion zone
    pub fn validate_spawn_scale(&self, scale: f32) -> Result<(), StarfieldError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(StarfieldError::InvalidSpawnScale(scale));
        }
        // Both rectangles share the viewport aspect, so comparing the
        // multipliers is enough.
        if self.near >= scale {
            return Err(StarfieldError::ExclusionCoversSpawnArea {
                near: self.near,
                scale,
            });
        }
        Ok(())
    }

    /// Distance between the near and far planes
    #[inline]
    pub fn depth_range(&self) -> f32 {
        self.far - self.near
    }

    /// Depth travelled in one fixed step
    #[inline]
    pub fn step(&self) -> f32 {
        self.speed * self.frame_interval
    }

    /// No-spawn rectangle around the origin: the viewport seen at the near plane
    pub fn exclusion_zone(&self) -> Rect {
        Rect::from_center_size(Vec2::ZERO, self.viewport * self.near)
    }
}
