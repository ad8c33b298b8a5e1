//! notes-app: a first-person note explorer
//!
//! Walk a ground plane, find the cubes floating on it and read the short
//! notes they hold. Notes are defined in a small text format embedded at
//! build time (see [`note`]).
//!
//! Controls:
//! - WASD to move, arrow keys or mouse to look
//! - E to read the nearby note, Escape to close it (or to quit)
//! - Q switches to the advanced control scheme, C hides the controls panel

pub mod config;
pub mod handlers;
pub mod logging;
pub mod note;
pub mod state;
pub mod store;
pub mod ui;

use anyhow::{Context, Result};
use notes_oui::{
    renderer::terminal::TerminalBackend, FirstPersonCamera, FrameApp, FrameRunner, InputFrame,
    RenderBackend, TerminalWindow, WindowConfig,
};

use config::{AppConfig, ControlsConfig};
use handlers::handle_tick;
use note::Note;
use state::{Session, DEBUG_NOTE};
use store::NoteStore;
use ui::render_session;

/// Note definitions shipped with the game
pub const NOTES_SOURCE: &str = include_str!("../assets/notes.txt");

/// Launch options
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Follow terminal size changes
    pub resize: bool,
    /// Developer overlay
    pub debug: bool,
}

/// The explorer as a frame application
pub struct NotesApp {
    notes: NoteStore,
    controls: ControlsConfig,
    debug: bool,
}

impl NotesApp {
    pub fn new(notes: NoteStore, controls: ControlsConfig, debug: bool) -> Self {
        Self {
            notes,
            controls,
            debug,
        }
    }
}

impl FrameApp for NotesApp {
    type State = Session;

    fn init(&self) -> Self::State {
        Session::new(self.notes.clone(), self.debug)
    }

    fn tick(&mut self, state: &mut Self::State, input: &InputFrame, camera: &mut FirstPersonCamera) -> bool {
        handle_tick(state, input, camera, &self.controls)
    }

    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend) {
        render_session(state, backend);
    }
}

/// Parse the embedded notes, adding the debug note when asked to
pub fn load_notes(source: &str, debug: bool) -> Result<NoteStore> {
    let mut notes = NoteStore::parse(source).context("Failed to parse notes")?;

    if debug {
        let note: Note = DEBUG_NOTE.parse().context("Failed to parse debug note")?;
        notes.push(note);
    }

    Ok(notes)
}

/// Run the explorer in the current terminal
pub fn run(options: Options) -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config)?;

    let notes = load_notes(NOTES_SOURCE, options.debug)?;
    tracing::info!(notes = notes.len(), debug = options.debug, resize = options.resize, "starting");

    let backend = TerminalBackend::new(options.resize).context("Failed to initialise renderer")?;
    let window = TerminalWindow::new(WindowConfig::default());
    let app = NotesApp::new(notes, config.controls.clone(), options.debug);

    let mut runner = FrameRunner::new(app, window, backend)
        .with_camera(config.initial_camera())
        .with_tick_rate(config.tick_rate());

    let session = runner.run()?;
    tracing::info!(
        ticks = session.tick,
        seen = session.notes.seen_count(),
        "closed"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use notes_oui::{Color, Point3D, RecordingBackend, ScriptedWindow};
    use state::Mode;
    use ui::wrap_text;

    #[test]
    fn test_embedded_notes_parse() {
        let notes = load_notes(NOTES_SOURCE, false).unwrap();
        assert!(!notes.is_empty());
        assert_eq!(notes.seen_count(), 0);
    }

    #[test]
    fn test_debug_note_appended_last() {
        let plain = load_notes(NOTES_SOURCE, false).unwrap();
        let debug = load_notes(NOTES_SOURCE, true).unwrap();

        assert_eq!(debug.len(), plain.len() + 1);
        let last = debug.get(debug.len() - 1).unwrap();
        assert_eq!(last.text(), "hello there");
        assert_eq!(last.position(), Point3D::new(1.0, 1.0, 4.0));
    }

    #[test]
    fn test_load_notes_error() {
        let err = load_notes("fine<end> 1 1 1<ent>broken", false).unwrap_err();
        assert!(format!("{:#}", err).contains("entry 2: missing '<end>' token"));
    }

    #[test]
    fn test_read_a_note_end_to_end() {
        let notes = NoteStore::parse("right here<end> 0 2 4<ent>elsewhere<end> 40 1 40").unwrap();
        let app = NotesApp::new(notes, ControlsConfig::default(), false);

        let frames = vec![
            InputFrame::default(),
            InputFrame::default().with_pressed(KeyCode::Char('e')),
            InputFrame::default(),
        ];
        let mut runner = FrameRunner::new(app, ScriptedWindow::new(frames), RecordingBackend::new(60, 20));
        let session = runner.run().unwrap();

        assert_eq!(session.mode, Mode::Reading);
        assert_eq!(session.viewed_text, "right here");
        assert!(session.notes.get(0).unwrap().is_seen());
        assert_eq!(runner.backend().texts(), wrap_text("right here", 60));
    }

    #[test]
    fn test_seen_note_drawn_in_seen_color() {
        let notes = NoteStore::parse("right here<end> 0 2 4").unwrap();
        let app = NotesApp::new(notes, ControlsConfig::default(), false);

        let frames = vec![
            InputFrame::default(),
            InputFrame::default().with_pressed(KeyCode::Char('e')),
            InputFrame::default().with_pressed(KeyCode::Esc),
        ];
        let mut runner = FrameRunner::new(app, ScriptedWindow::new(frames), RecordingBackend::default());
        let session = runner.run().unwrap();

        assert_eq!(session.mode, Mode::Exploring);
        assert_eq!(runner.backend().cubes(), vec![(Point3D::new(0.0, 2.0, 4.0), Color::VIOLET)]);
        assert!(runner.backend().has_text("Press E to read"));
    }
}
