//! The 3D scene

use notes_oui::{Color, Point3D, RenderBackend};

use crate::handlers::GROUND_SIZE;
use crate::note::{Note, NOTE_SIZE};
use crate::store::NoteStore;

pub const BACKGROUND: Color = Color::RAY_WHITE;
pub const GROUND: Color = Color::LIGHT_GRAY;
pub const UNSEEN: Color = Color::PURPLE;
pub const SEEN: Color = Color::VIOLET;

pub fn render_world(notes: &NoteStore, backend: &mut dyn RenderBackend) {
    backend.clear(BACKGROUND);
    backend.draw_plane(Point3D::ORIGIN, (GROUND_SIZE, GROUND_SIZE), GROUND);

    for note in notes.iter() {
        backend.draw_cube(note.position(), NOTE_SIZE, note_color(note));
    }
}

fn note_color(note: &Note) -> Color {
    if note.is_seen() {
        SEEN
    } else {
        UNSEEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_oui::{DrawCommand, RecordingBackend};

    #[test]
    fn test_scene_layout() {
        let mut notes = NoteStore::new();
        notes.push(Note::new(Point3D::new(1.0, 1.0, 1.0), "a"));
        notes.push(Note::new(Point3D::new(-3.0, 2.0, 5.0), "b"));

        let mut backend = RecordingBackend::default();
        render_world(&notes, &mut backend);

        assert_eq!(backend.commands()[0], DrawCommand::Clear(BACKGROUND));
        assert_eq!(
            backend.commands()[1],
            DrawCommand::Plane {
                center: Point3D::ORIGIN,
                size: (320.0, 320.0),
                color: GROUND
            }
        );
        assert_eq!(
            backend.cubes(),
            vec![(Point3D::new(1.0, 1.0, 1.0), UNSEEN), (Point3D::new(-3.0, 2.0, 5.0), UNSEEN)]
        );
    }

    #[test]
    fn test_seen_notes_change_color_once() {
        let mut notes = NoteStore::new();
        notes.push(Note::new(Point3D::ORIGIN, "a"));
        let mut backend = RecordingBackend::default();

        notes.mark_seen(0);
        render_world(&notes, &mut backend);
        let first = backend.cubes();

        notes.mark_seen(0);
        backend.begin_frame().unwrap();
        render_world(&notes, &mut backend);

        assert_eq!(first, vec![(Point3D::ORIGIN, SEEN)]);
        assert_eq!(backend.cubes(), first);
    }
}
