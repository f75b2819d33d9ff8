//! Star simulation system
//!
//! Owns the star field and runs one fixed-interval step per frame:
//! - Depth advance and recycling
//! - Projection into the shared quad buffer, furthest star first

use starfield_core::{DepthScheduler, FieldGenerator, StarConfig, StarField, StarfieldError};
use starfield_render::{GeometryProjector, QuadBuffer};

/// Manages the star field for the frame loop
pub struct SimulationSystem {
    field: StarField,
    scheduler: DepthScheduler,
    projector: GeometryProjector,
    speed: f32,
    frame_interval: f32,
}

impl SimulationSystem {
    /// Validate `config` and generate the initial field from `seed`
    pub fn new(config: &StarConfig, seed: u64) -> Result<Self, StarfieldError> {
        let generator = FieldGenerator::new(config)?;
        let field = generator.generate_seeded(config.count, config.spawn_scale, seed)?;

        log::info!(
            "Generated {} stars (seed {}, depth {}..{})",
            field.len(),
            seed,
            config.near,
            config.far
        );

        Ok(Self {
            field,
            scheduler: DepthScheduler::new(config),
            projector: GeometryProjector::new(config),
            speed: config.speed,
            frame_interval: config.frame_interval,
        })
    }

    /// Advance every star by one fixed interval
    ///
    /// Returns the new furthest index if any star was recycled.
    pub fn tick(&mut self) -> Option<usize> {
        self.scheduler
            .advance(&mut self.field, self.speed, self.frame_interval)
    }

    /// Write every star into `buffer` in ring order
    pub fn project_into(&self, buffer: &mut QuadBuffer) {
        self.projector.project_field(&self.field, buffer);
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn star_count(&self) -> usize {
        self.field.len()
    }
}
