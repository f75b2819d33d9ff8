//! Starfield error types
//!
//! Every variant is a configuration or generation failure detected before the
//! frame loop starts. Depth advance and projection never fail.

use std::fmt;

/// Error type for star field configuration and generation
#[derive(Debug, Clone, PartialEq)]
pub enum StarfieldError {
    /// Star count must be at least one
    EmptyField,
    /// Viewport dimensions must be finite and positive
    InvalidViewport { width: f32, height: f32 },
    /// Depth planes must satisfy `0 < near < far`
    InvalidDepthRange { near: f32, far: f32 },
    /// Spawn scale must be finite and positive
    InvalidSpawnScale(f32),
    /// The exclusion zone (`viewport * near`) is not strictly inside the
    /// spawn area (`viewport * scale`)
    ExclusionCoversSpawnArea { near: f32, scale: f32 },
    /// Speed must be finite and non-negative
    InvalidSpeed(f32),
    /// Frame interval must be finite and positive
    InvalidFrameInterval(f32),
    /// A single tick moves stars by at least the whole depth range
    StepTooLarge { step: f32, range: f32 },
    /// Star radius must be finite and non-negative
    InvalidRadius(f32),
    /// Rejection sampling ran out of attempts for one slot
    SamplingExhausted { slot: usize, attempts: u32 },
}

impl fmt::Display for StarfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarfieldError::EmptyField => write!(f, "Star count must be greater than zero"),
            StarfieldError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport size {}x{}", width, height)
            }
            StarfieldError::InvalidDepthRange { near, far } => write!(
                f,
                "Invalid depth range: near={} far={} (need 0 < near < far)",
                near, far
            ),
            StarfieldError::InvalidSpawnScale(scale) => {
                write!(f, "Invalid spawn scale: {}", scale)
            }
            StarfieldError::ExclusionCoversSpawnArea { near, scale } => write!(
                f,
                "Exclusion zone covers the spawn area: near={} must be less than scale={}",
                near, scale
            ),
            StarfieldError::InvalidSpeed(speed) => write!(f, "Invalid star speed: {}", speed),
            StarfieldError::InvalidFrameInterval(dt) => {
                write!(f, "Invalid frame interval: {}", dt)
            }
            StarfieldError::StepTooLarge { step, range } => write!(
                f,
                "Per-tick depth step {} must be smaller than the depth range {}",
                step, range
            ),
            StarfieldError::InvalidRadius(radius) => write!(f, "Invalid star radius: {}", radius),
            StarfieldError::SamplingExhausted { slot, attempts } => write!(
                f,
                "Could not place star {} outside the exclusion zone after {} attempts",
                slot, attempts
            ),
        }
    }
}

impl std::error::Error for StarfieldError {}
