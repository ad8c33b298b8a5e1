//! Window lifecycle and the fixed-rate frame loop

mod framework;
mod window;

pub use framework::{FrameApp, FrameRunner};
pub use window::{ScriptedWindow, TerminalWindow, Window, WindowConfig};
