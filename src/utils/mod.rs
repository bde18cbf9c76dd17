//! Rendering and step tracing.

pub mod render;
pub mod trace;
pub use trace::{Step, log_step, print_step, render_into};
