//! Starfield application library
//!
//! Configuration, input mapping and the frame-driver systems. The binary in
//! `main.rs` wires these into a winit event loop.

pub mod config;
pub mod input;
pub mod systems;
