//! Notes UI
//!
//! Two screens:
//! - Exploring: the 3D field with its notes, plus HUD panels on top
//! - Reading: the text of the last opened note on a black page

mod hud;
mod reader;
mod world;

pub use reader::wrap_text;

use notes_oui::RenderBackend;

use crate::state::{Mode, Session};

/// Render the current screen
pub fn render_session(session: &Session, backend: &mut dyn RenderBackend) {
    match session.mode {
        Mode::Reading => reader::render_reader(&session.viewed_text, backend),
        Mode::Exploring => {
            world::render_world(&session.notes, backend);
            hud::render_hud(session, backend);
        }
    }
}
