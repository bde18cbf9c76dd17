//! Option structs for tracing and rendering.

pub mod options;
pub use options::{RenderOptions, TraceOptions};
