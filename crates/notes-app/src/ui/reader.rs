//! Full-screen note text

use notes_oui::{Color, RenderBackend};
use unicode_width::UnicodeWidthChar;

const PAGE: Color = Color::Black;
const INK: Color = Color::White;

pub fn render_reader(text: &str, backend: &mut dyn RenderBackend) {
    backend.clear(PAGE);

    let width = backend.capabilities().width as usize;
    for (row, line) in wrap_text(text, width).iter().enumerate() {
        backend.draw_text(0, row as i32, line, INK);
    }
}

/// Break `text` into rows of at most `width` columns
///
/// `\n` always starts a new row; long rows wrap at whatever character hits
/// the edge, words are not kept together.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;

    for ch in text.chars() {
        if ch == '\n' {
            rows.push(std::mem::take(&mut row));
            used = 0;
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(ch);
        used += ch_width;
    }

    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_oui::{DrawCommand, RecordingBackend};

    #[test]
    fn test_hard_breaks() {
        assert_eq!(wrap_text("one\ntwo\n\nfour", 80), vec!["one", "two", "", "four"]);
    }

    #[test]
    fn test_soft_wrap() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("abcd\nef", 4), vec!["abcd", "ef"]);
    }

    #[test]
    fn test_wide_characters() {
        assert_eq!(wrap_text("日本語です", 5), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn test_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_render_reader() {
        let mut backend = RecordingBackend::new(10, 5);
        render_reader("short\nthis line wraps", &mut backend);

        assert_eq!(backend.commands()[0], DrawCommand::Clear(PAGE));
        assert_eq!(backend.texts(), vec!["short", "this line ", "wraps"]);
        assert!(backend.cubes().is_empty());
    }
}
