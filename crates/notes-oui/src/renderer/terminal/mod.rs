//! Character-cell rendering of the 3D scene

mod backend;
mod projection;

pub use backend::TerminalBackend;
pub use projection::{Projection, CELL_ASPECT};
