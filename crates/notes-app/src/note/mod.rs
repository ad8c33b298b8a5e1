//! Notes and the note-definition language
//!
//! A note source is a list of entries separated by `<ent>`. Each entry holds
//! free text, the `<end>` token and three coordinates:
//!
//! ```text
//! Welcome to the field.<end> 0 1 -6
//! <ent>
//! Right next to the first one.<end> p p -3
//! <ent>
//! Somewhere out there.<end> r 1 r
//! ```
//!
//! A coordinate is either a float literal, `p` (the same axis of the previous
//! entry) or `r` (a random offset, see [`SPAWN_RANGE`]).

mod error;
mod parser;

use std::fmt;
use std::str::FromStr;

use notes_oui::Point3D;

pub use error::{NoteError, Result};
pub use parser::{parse_note, parse_note_with, parse_notes, parse_notes_with};

/// Edge length of the cube drawn for a note, also the reach of its proximity box
pub const NOTE_SIZE: f32 = 0.75;

/// Width of the interval `r` coordinates are drawn from
pub const SPAWN_RANGE: i32 = 80;

/// A piece of text placed somewhere in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    position: Point3D,
    text: String,
    seen: bool,
}

impl Note {
    pub fn new(position: Point3D, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            seen: false,
        }
    }

    pub fn position(&self) -> Point3D {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the note has been read at least once
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn mark_seen(&mut self) {
        self.seen = true;
    }

    /// Axis-aligned proximity test
    ///
    /// On every axis the distance from `observer` to the note, minus
    /// [`NOTE_SIZE`], must be below `allowed_distance`.
    pub fn is_near(&self, observer: Point3D, allowed_distance: f32) -> bool {
        let within = |a: f32, b: f32| (a - b).abs() - NOTE_SIZE < allowed_distance;

        within(observer.x, self.position.x)
            && within(observer.y, self.position.y)
            && within(observer.z, self.position.z)
    }
}

/// Renders the note back into its definition form
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<end> {} {} {}",
            self.text, self.position.x, self.position.y, self.position.z
        )
    }
}

impl FromStr for Note {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        parse_note(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_is_unseen() {
        let note = Note::new(Point3D::new(1.0, 2.0, 3.0), "hello");
        assert_eq!(note.text(), "hello");
        assert_eq!(note.position(), Point3D::new(1.0, 2.0, 3.0));
        assert!(!note.is_seen());
    }

    #[test]
    fn test_mark_seen_is_idempotent() {
        let mut note = Note::new(Point3D::ORIGIN, "x");
        note.mark_seen();
        note.mark_seen();
        assert!(note.is_seen());
    }

    #[test]
    fn test_is_near_box() {
        let note = Note::new(Point3D::ORIGIN, "x");
        assert!(note.is_near(Point3D::ORIGIN, 1.0));
        // 1.7 - 0.75 = 0.95 on one axis only
        assert!(note.is_near(Point3D::new(1.7, 0.0, -1.7), 1.0));
        // 1.8 - 0.75 = 1.05
        assert!(!note.is_near(Point3D::new(0.0, 1.8, 0.0), 1.0));
        assert!(!note.is_near(Point3D::new(5.0, 5.0, 5.0), 1.0));
    }

    #[test]
    fn test_is_near_is_not_euclidean() {
        let note = Note::new(Point3D::ORIGIN, "x");
        let corner = Point3D::new(1.7, 1.7, 1.7);
        assert!((corner - Point3D::ORIGIN).magnitude() > 1.75);
        assert!(note.is_near(corner, 1.0));
    }

    #[test]
    fn test_display() {
        let note = Note::new(Point3D::new(1.0, -2.5, 0.1), "hi there");
        assert_eq!(note.to_string(), "hi there<end> 1 -2.5 0.1");
    }

    #[test]
    fn test_from_str() {
        let note: Note = "hello<end> 1 2 3".parse().unwrap();
        assert_eq!(note, Note::new(Point3D::new(1.0, 2.0, 3.0), "hello"));
    }
}
