//! notes-oui: presentation layer for the notes explorer
//!
//! This crate provides everything the game needs from a "window":
//! - 3D spatial primitives and a first-person camera
//! - Abstract render backend (terminal renderer + recording backend for tests)
//! - Per-tick input frames (newly pressed keys, held keys, mouse delta)
//! - A window abstraction and a fixed-rate frame runner

pub mod spatial;
pub mod renderer;
pub mod input;
pub mod app;

// Re-export commonly used types
pub use spatial::{FirstPersonCamera, Point3D, Vector3D};
pub use renderer::{Color, DrawCommand, RecordingBackend, RenderBackend, RenderError, SurfaceCapabilities};
pub use input::{InputFrame, KeyTracker};
pub use app::{FrameApp, FrameRunner, ScriptedWindow, TerminalWindow, Window, WindowConfig};
