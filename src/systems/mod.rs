//! Application systems
//!
//! The frame driver split into window, render and simulation concerns.

mod frame_clock;
mod render;
mod simulation;
mod window;

pub use frame_clock::FrameClock;
pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
