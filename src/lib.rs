//! Library exports for the polysketch polygon sketcher.
//!
//! Exposes the input state machine, drawing types and configuration so UI
//! backends can feed pointer, toolbar and resize events and render the
//! resulting polygons and live preview.

pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod script;

pub use config::Config;
pub use geometry::{Point, Transform};
pub use input::{InputState, Tool};
