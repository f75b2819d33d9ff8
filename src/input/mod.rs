//! Input handling
//!
//! Maps raw window events to semantic actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
