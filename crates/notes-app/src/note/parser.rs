//! Parser for the note-definition language

use notes_oui::Point3D;
use rand::Rng;

use super::error::{NoteError, Result};
use super::{Note, SPAWN_RANGE};

const END_TOKEN: &str = "<end>";
const ENTRY_SEPARATOR: &str = "<ent>";

/// Parse a single entry, resolving `p` against the origin
pub fn parse_note(source: &str) -> Result<Note> {
    parse_note_with(source, &mut rand::thread_rng())
}

/// Like [`parse_note`], drawing `r` coordinates from `rng`
pub fn parse_note_with<R: Rng + ?Sized>(source: &str, rng: &mut R) -> Result<Note> {
    parse_entry(source, 1, Point3D::ORIGIN, rng)
}

/// Parse every entry of a `<ent>`-separated source
///
/// Blank entries are skipped. `p` coordinates resolve against the entry
/// parsed just before. The first malformed entry aborts the whole parse.
///
/// `r` coordinates come from the thread RNG, so parsing the same source
/// twice gives different positions for them. Use [`parse_notes_with`] and
/// a seeded RNG for reproducible results.
pub fn parse_notes(source: &str) -> Result<Vec<Note>> {
    parse_notes_with(source, &mut rand::thread_rng())
}

/// Like [`parse_notes`], drawing `r` coordinates from `rng`
pub fn parse_notes_with<R: Rng + ?Sized>(source: &str, rng: &mut R) -> Result<Vec<Note>> {
    let mut notes: Vec<Note> = Vec::new();

    let entries = source
        .trim()
        .split(ENTRY_SEPARATOR)
        .filter(|entry| !entry.trim().is_empty());

    for (index, entry) in entries.enumerate() {
        let previous = notes.last().map(Note::position).unwrap_or(Point3D::ORIGIN);
        notes.push(parse_entry(entry, index + 1, previous, rng)?);
    }

    Ok(notes)
}

fn parse_entry<R: Rng + ?Sized>(
    source: &str,
    entry: usize,
    previous: Point3D,
    rng: &mut R,
) -> Result<Note> {
    let source = source.trim();
    let (text, rest) = source
        .split_once(END_TOKEN)
        .ok_or(NoteError::MissingEndToken { entry })?;

    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(NoteError::FieldCount {
            entry,
            found: fields.len(),
        });
    }

    let previous = previous.to_array();
    let mut coords = [0.0f32; 3];
    for (axis, field) in fields.iter().enumerate() {
        coords[axis] = match *field {
            "p" => previous[axis],
            "r" => random_offset(rng),
            literal => parse_literal(literal, entry)?,
        };
    }

    Ok(Note::new(Point3D::from(coords), text.trim()))
}

/// Draw from `[0, SPAWN_RANGE)` and shift the low part of the range below zero
///
/// Yields values in `[-40, -2]` and `[39, 79]`.
fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let mut n = rng.gen_range(0..SPAWN_RANGE);
    if n < SPAWN_RANGE / 2 - 1 {
        n -= SPAWN_RANGE / 2;
    }
    n as f32
}

fn parse_literal(field: &str, entry: usize) -> Result<f32> {
    match field.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NoteError::NumberFormat {
            entry,
            field: field.to_string(),
        }),
    }
}
