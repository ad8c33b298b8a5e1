//! Per-tick input snapshot

use std::collections::HashSet;

use crossterm::event::KeyCode;

/// Input gathered during a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pressed: HashSet<KeyCode>,
    held: HashSet<KeyCode>,
    mouse_delta: (f32, f32),
}

impl InputFrame {
    pub fn new(pressed: HashSet<KeyCode>, held: HashSet<KeyCode>, mouse_delta: (f32, f32)) -> Self {
        Self {
            pressed: pressed.into_iter().map(normalize).collect(),
            held: held.into_iter().map(normalize).collect(),
            mouse_delta,
        }
    }

    /// A key that went down this tick (it also counts as held)
    pub fn with_pressed(mut self, code: KeyCode) -> Self {
        self.pressed.insert(normalize(code));
        self.held.insert(normalize(code));
        self
    }

    /// A key that is down but was not pressed this tick
    pub fn with_held(mut self, code: KeyCode) -> Self {
        self.held.insert(normalize(code));
        self
    }

    pub fn with_mouse_delta(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = (dx, dy);
        self
    }

    /// Check whether a key was newly pressed this tick
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&normalize(code))
    }

    /// Check whether a key is currently held
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&normalize(code))
    }

    /// Mouse movement since the previous tick
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

/// Letter keys are matched case-insensitively
pub(crate) fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_implies_held() {
        let frame = InputFrame::default().with_pressed(KeyCode::Char('e'));
        assert!(frame.is_pressed(KeyCode::Char('e')));
        assert!(frame.is_held(KeyCode::Char('e')));
        assert!(!frame.is_pressed(KeyCode::Esc));
    }

    #[test]
    fn test_letters_ignore_case() {
        let frame = InputFrame::default().with_pressed(KeyCode::Char('Q'));
        assert!(frame.is_pressed(KeyCode::Char('q')));
        assert!(frame.is_pressed(KeyCode::Char('Q')));
    }
}
