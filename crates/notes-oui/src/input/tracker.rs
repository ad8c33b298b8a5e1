//! Keyboard and mouse state tracking for terminal input
//!
//! Terminals report key presses as discrete events; most of them never report
//! releases. The tracker turns the event stream into per-tick [`InputFrame`]s:
//! when releases are reported a key is held until it is released, otherwise a
//! key stays held for a short window after its last press or auto-repeat.

use std::collections::{HashMap, HashSet};

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::frame::normalize;
use super::InputFrame;

/// Ticks a key stays held after its last press when releases are not reported
const DEFAULT_HOLD_TICKS: u32 = 30;
/// Mouse units per terminal cell moved
const DEFAULT_MOUSE_SCALE: f32 = 8.0;

/// Accumulates raw terminal events between ticks
pub struct KeyTracker {
    /// Keys pressed since the last tick
    pressed: HashSet<crossterm::event::KeyCode>,
    /// Keys considered down, with their remaining hold window
    held: HashMap<crossterm::event::KeyCode, u32>,
    /// Whether the terminal sends release events
    releases_reported: bool,
    hold_ticks: u32,
    last_mouse: Option<(u16, u16)>,
    mouse_delta: (f32, f32),
    mouse_scale: f32,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self {
            pressed: HashSet::new(),
            held: HashMap::new(),
            releases_reported: false,
            hold_ticks: DEFAULT_HOLD_TICKS,
            last_mouse: None,
            mouse_delta: (0.0, 0.0),
            mouse_scale: DEFAULT_MOUSE_SCALE,
        }
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hold window used when releases are not reported
    pub fn with_hold_ticks(mut self, ticks: u32) -> Self {
        self.hold_ticks = ticks.max(1);
        self
    }

    pub fn set_releases_reported(&mut self, reported: bool) {
        self.releases_reported = reported;
    }

    /// Record a keyboard event
    pub fn process_key(&mut self, key: KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press => {
                self.pressed.insert(code);
                self.held.insert(code, self.hold_ticks);
            }
            KeyEventKind::Repeat => {
                self.held.insert(code, self.hold_ticks);
            }
            KeyEventKind::Release => {
                self.held.remove(&code);
            }
        }
    }

    /// Record a mouse event; only movement contributes
    pub fn process_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }

        if let Some((col, row)) = self.last_mouse {
            self.mouse_delta.0 += (mouse.column as f32 - col as f32) * self.mouse_scale;
            self.mouse_delta.1 += (mouse.row as f32 - row as f32) * self.mouse_scale;
        }
        self.last_mouse = Some((mouse.column, mouse.row));
    }

    /// Close the current tick and return what happened during it
    pub fn finish_tick(&mut self) -> InputFrame {
        let frame = InputFrame::new(
            std::mem::take(&mut self.pressed),
            self.held.keys().copied().collect(),
            std::mem::take(&mut self.mouse_delta),
        );

        if !self.releases_reported {
            self.held.retain(|_, remaining| {
                *remaining = remaining.saturating_sub(1);
                *remaining > 0
            });
        }

        frame
    }

    /// Forget all key and mouse state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.held.clear();
        self.last_mouse = None;
        self.mouse_delta = (0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    fn mouse_at(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_press_is_reported_once() {
        let mut tracker = KeyTracker::new();
        tracker.process_key(press('e'));

        let first = tracker.finish_tick();
        assert!(first.is_pressed(KeyCode::Char('e')));

        let second = tracker.finish_tick();
        assert!(!second.is_pressed(KeyCode::Char('e')));
        assert!(second.is_held(KeyCode::Char('e')));
    }

    #[test]
    fn test_hold_window_expires() {
        let mut tracker = KeyTracker::new().with_hold_ticks(2);
        tracker.process_key(press('w'));

        assert!(tracker.finish_tick().is_held(KeyCode::Char('w')));
        assert!(tracker.finish_tick().is_held(KeyCode::Char('w')));
        assert!(!tracker.finish_tick().is_held(KeyCode::Char('w')));
    }

    #[test]
    fn test_release_ends_hold() {
        let mut tracker = KeyTracker::new();
        tracker.set_releases_reported(true);
        tracker.process_key(press('w'));
        tracker.finish_tick();
        tracker.finish_tick();
        assert!(tracker.finish_tick().is_held(KeyCode::Char('w')));

        tracker.process_key(KeyEvent::new_with_kind(
            KeyCode::Char('w'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        ));
        assert!(!tracker.finish_tick().is_held(KeyCode::Char('w')));
    }

    #[test]
    fn test_mouse_delta_accumulates() {
        let mut tracker = KeyTracker::new();
        tracker.process_mouse(mouse_at(10, 10));
        tracker.process_mouse(mouse_at(12, 9));
        tracker.process_mouse(mouse_at(13, 9));

        let frame = tracker.finish_tick();
        assert_eq!(frame.mouse_delta(), (3.0 * DEFAULT_MOUSE_SCALE, -DEFAULT_MOUSE_SCALE));
        assert_eq!(tracker.finish_tick().mouse_delta(), (0.0, 0.0));
    }
}
