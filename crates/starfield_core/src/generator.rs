//! Initial star placement
//!
//! Offsets are sampled uniformly over the spawn area and rejected when they
//! land inside the exclusion zone, so no star starts directly in front of the
//! viewer. Depths are uniform over `[near, far)`. The result is sorted
//! furthest-first once; nothing re-sorts it afterwards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use starfield_math::Vec2;

use crate::{Star, StarConfig, StarField, StarfieldError};

/// Default cap on rejection-sampling attempts for a single star
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Builds the initial [`StarField`] from a validated [`StarConfig`]
pub struct FieldGenerator {
    config: StarConfig,
    max_attempts: u32,
}

impl FieldGenerator {
    /// Create a generator, validating `config` first
    pub fn new(config: &StarConfig) -> Result<Self, StarfieldError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Override the per-star rejection-sampling cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Configuration this generator samples against
    pub fn config(&self) -> &StarConfig {
        &self.config
    }

    /// Generate `count` stars over `viewport * scale`, drawing from `rng`
    ///
    /// The same `rng` state always produces the same field.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: u32,
        scale: f32,
        rng: &mut R,
    ) -> Result<StarField, StarfieldError> {
        if count == 0 {
            return Err(StarfieldError::EmptyField);
        }
        self.config.validate_spawn_scale(scale)?;

        let exclusion = self.config.exclusion_zone();
        let extent = self.config.viewport * scale;
        let near = self.config.near;
        let range = self.config.depth_range();
        let max_depth = largest_below(self.config.far);

        let mut stars = Vec::with_capacity(count as usize);
        let mut rejected: u64 = 0;

        for slot in 0..count as usize {
            let mut attempts = 0;
            let star = loop {
                if attempts == self.max_attempts {
                    return Err(StarfieldError::SamplingExhausted {
                        slot,
                        attempts,
                    });
                }
                attempts += 1;

                let x = (rng.random::<f32>() - 0.5) * extent.x;
                let y = (rng.random::<f32>() - 0.5) * extent.y;
                // Rounding can land exactly on far; keep the range half-open
                let depth = (rng.random::<f32>() * range + near).min(max_depth);

                let offset = Vec2::new(x, y);
                if exclusion.contains(offset) {
                    rejected += 1;
                    continue;
                }
                break Star::new(offset, depth);
            };
            stars.push(star);
        }

        stars.sort_by(|a, b| b.depth().total_cmp(&a.depth()));

        log::debug!(
            "Generated {} stars over {:.0}x{:.0} ({} samples rejected by exclusion zone)",
            count,
            extent.x,
            extent.y,
            rejected
        );

        Ok(StarField::from_sorted(stars))
    }

    /// Generate using a ChaCha8 stream seeded with `seed`
    pub fn generate_seeded(
        &self,
        count: u32,
        scale: f32,
        seed: u64,
    ) -> Result<StarField, StarfieldError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(count, scale, &mut rng)
    }
}

/// Largest `f32` strictly below a positive finite `x`
fn largest_below(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}
