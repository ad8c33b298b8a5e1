//! Ordered note collection

use std::ops::Index;

use notes_oui::Point3D;

use crate::note::{self, Note};

/// Notes in definition order
///
/// Indices are stable: notes are only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `<ent>`-separated source into a store
    pub fn parse(source: &str) -> note::Result<Self> {
        note::parse_notes(source).map(Self::from)
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of notes read at least once
    pub fn seen_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_seen()).count()
    }

    /// Index of the note the observer can interact with
    ///
    /// When several notes are in reach the one defined last wins.
    pub fn find_near_interactable(&self, observer: Point3D, allowed_distance: f32) -> Option<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.is_near(observer, allowed_distance))
            .map(|(index, _)| index)
            .last()
    }

    /// Flag a note as read
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn mark_seen(&mut self, index: usize) {
        self.notes[index].mark_seen();
    }

    /// Serialize back into the definition language
    pub fn to_source(&self) -> String {
        self.notes
            .iter()
            .map(Note::to_string)
            .collect::<Vec<_>>()
            .join("\n<ent>\n")
    }
}

impl Index<usize> for NoteStore {
    type Output = Note;

    fn index(&self, index: usize) -> &Note {
        &self.notes[index]
    }
}

impl From<Vec<Note>> for NoteStore {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteError;

    fn store_at(points: &[(f32, f32, f32)]) -> NoteStore {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z))| Note::new(Point3D::new(x, y, z), format!("note {}", i)))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_near_origin() {
        let store = store_at(&[(0.0, 0.0, 0.0)]);
        assert_eq!(store.find_near_interactable(Point3D::ORIGIN, 1.0), Some(0));
        assert_eq!(store.find_near_interactable(Point3D::new(5.0, 5.0, 5.0), 1.0), None);
    }

    #[test]
    fn test_empty_store_has_nothing_near() {
        assert_eq!(NoteStore::new().find_near_interactable(Point3D::ORIGIN, 1.0), None);
    }

    #[test]
    fn test_last_match_wins() {
        let store = store_at(&[(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (0.5, 0.0, 0.0), (0.0, 0.0, 40.0)]);
        assert_eq!(store.find_near_interactable(Point3D::ORIGIN, 1.0), Some(2));
    }

    #[test]
    fn test_mark_seen() {
        let mut store = store_at(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
        store.mark_seen(1);
        store.mark_seen(1);
        assert!(!store.get(0).unwrap().is_seen());
        assert!(store.get(1).unwrap().is_seen());
        assert_eq!(store.seen_count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_mark_seen_out_of_range_panics() {
        let mut store = store_at(&[(0.0, 0.0, 0.0)]);
        store.mark_seen(1);
    }

    #[test]
    fn test_parse_is_atomic() {
        let err = NoteStore::parse("a<end> 1 1 1<ent>b<end> x 1 1").unwrap_err();
        assert!(matches!(err, NoteError::NumberFormat { entry: 2, .. }));
    }

    #[test]
    fn test_round_trip() {
        let source = "first<end> 1 2 3<ent>second\nline<end> -0.5 p 1e-3<ent>third<end> 12.75 0 p";
        let store = NoteStore::parse(source).unwrap();
        let reparsed = NoteStore::parse(&store.to_source()).unwrap();

        assert_eq!(reparsed.len(), 3);
        for (a, b) in store.iter().zip(reparsed.iter()) {
            assert_eq!(a.text(), b.text());
            assert_eq!(a.position().to_array().map(f32::to_bits), b.position().to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_push_appends() {
        let mut store = store_at(&[(0.0, 0.0, 0.0)]);
        store.push(Note::new(Point3D::new(1.0, 1.0, 4.0), "hello there"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().text(), "hello there");
        assert!(!store.is_empty());
    }
}
