//! Session state for the explorer

use crate::store::NoteStore;

/// Text shown when reading before any note has been opened in debug mode
pub const DEMO_TEXT: &str = "hello hello let me tell you what it's like to be a zero zero\n\
let me show you what it's like to always feel feel like I'm empty and there's nothing really real real\n\
I'm looking for a way out";

/// Synthetic note appended in debug mode
pub const DEBUG_NOTE: &str = "hello there<end> 1 1 4";

/// What the player is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Walking around the field
    #[default]
    Exploring,
    /// Looking at the text of a note
    Reading,
}

/// Everything the tick loop mutates
#[derive(Debug, Clone)]
pub struct Session {
    /// Current tick
    pub tick: u64,
    pub mode: Mode,
    /// Note within reach of the camera, refreshed every exploring tick
    pub nearest_note: Option<usize>,
    /// Text shown while reading; keeps its value after leaving
    pub viewed_text: String,
    pub controls_visible: bool,
    pub advanced_controls: bool,
    /// Developer overlay
    pub debug: bool,
    pub notes: NoteStore,
}

impl Session {
    pub fn new(notes: NoteStore, debug: bool) -> Self {
        Self {
            tick: 0,
            mode: Mode::Exploring,
            nearest_note: None,
            viewed_text: if debug { DEMO_TEXT.to_string() } else { String::new() },
            controls_visible: true,
            advanced_controls: false,
            debug,
            notes,
        }
    }

    pub fn is_reading(&self) -> bool {
        self.mode == Mode::Reading
    }

    /// Open the nearest note, if any; returns whether reading started
    ///
    /// # Panics
    ///
    /// Panics if `nearest_note` points past the end of the store.
    pub fn interact(&mut self) -> bool {
        let Some(index) = self.nearest_note else {
            return false;
        };

        self.viewed_text = self.notes[index].text().to_string();
        self.notes.mark_seen(index);
        self.mode = Mode::Reading;
        true
    }

    /// Leave the reading view
    pub fn cancel(&mut self) {
        self.mode = Mode::Exploring;
    }

    pub fn toggle_controls(&mut self) {
        self.controls_visible = !self.controls_visible;
    }

    pub fn toggle_advanced(&mut self) {
        self.advanced_controls = !self.advanced_controls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;
    use notes_oui::Point3D;

    fn session() -> Session {
        let mut notes = NoteStore::new();
        notes.push(Note::new(Point3D::ORIGIN, "first"));
        notes.push(Note::new(Point3D::new(9.0, 0.0, 9.0), "second"));
        Session::new(notes, false)
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.mode, Mode::Exploring);
        assert_eq!(session.nearest_note, None);
        assert!(session.controls_visible);
        assert!(!session.advanced_controls);
        assert!(session.viewed_text.is_empty());
    }

    #[test]
    fn test_debug_starts_with_demo_text() {
        let session = Session::new(NoteStore::new(), true);
        assert_eq!(session.viewed_text, DEMO_TEXT);
    }

    #[test]
    fn test_interact_and_cancel() {
        let mut session = session();
        session.nearest_note = Some(0);

        assert!(session.interact());
        assert_eq!(session.mode, Mode::Reading);
        assert_eq!(session.viewed_text, "first");
        assert!(session.notes.get(0).unwrap().is_seen());
        assert!(!session.notes.get(1).unwrap().is_seen());

        session.cancel();
        assert_eq!(session.mode, Mode::Exploring);
        assert_eq!(session.viewed_text, "first");
    }

    #[test]
    fn test_interact_without_nearby_note() {
        let mut session = session();
        assert!(!session.interact());
        assert_eq!(session.mode, Mode::Exploring);
        assert_eq!(session.notes.seen_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_interact_with_stale_index_panics() {
        let mut session = session();
        session.nearest_note = Some(2);
        session.interact();
    }
}
