//! Rendering backend abstraction
//!
//! Provides a trait-based abstraction over different rendering backends:
//! - Terminal backend that projects the scene into character cells
//! - Recording backend that captures draw calls for headless tests

mod backend;
mod recording;
mod surface;
pub mod terminal;

pub use backend::{RenderBackend, RenderError};
pub use recording::{DrawCommand, RecordingBackend};
pub use surface::{Color, SurfaceCapabilities};
