//! Window abstraction: lifecycle plus per-tick input polling

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use crate::input::{InputFrame, KeyTracker};

/// Window settings
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Ticks a key counts as held when the terminal does not report releases
    pub hold_ticks: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Notes".to_string(),
            hold_ticks: 30,
        }
    }
}

/// Something the frame loop can open, poll for input, and close
pub trait Window {
    /// Acquire the display
    fn open(&mut self) -> io::Result<()>;

    /// Gather input until `timeout` elapses and return it as one frame
    fn poll_frame(&mut self, timeout: Duration) -> io::Result<InputFrame>;

    /// Whether the user or the app asked to close
    fn should_close(&self) -> bool;

    /// Ask the window to close at the end of the current tick
    fn request_close(&mut self);

    /// Release the display
    fn close(&mut self) -> io::Result<()>;
}

/// The hosting terminal used as a window
pub struct TerminalWindow {
    config: WindowConfig,
    tracker: KeyTracker,
    open: bool,
    enhanced_keyboard: bool,
    close_requested: bool,
}

impl TerminalWindow {
    pub fn new(config: WindowConfig) -> Self {
        let tracker = KeyTracker::new().with_hold_ticks(config.hold_ticks);
        Self {
            config,
            tracker,
            open: false,
            enhanced_keyboard: false,
            close_requested: false,
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Raw mode swallows SIGINT, so Ctrl+C always closes
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl
                    && key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                {
                    self.close_requested = true;
                    return;
                }
                self.tracker.process_key(key);
            }
            Event::Mouse(mouse) => self.tracker.process_mouse(mouse),
            Event::FocusLost => self.tracker.reset(),
            _ => {}
        }
    }
}

impl Window for TerminalWindow {
    fn open(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        // From here on close() has something to undo, even if a step below fails
        self.open = true;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(&self.config.title),
            cursor::Hide
        )?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            self.enhanced_keyboard = true;
        }
        self.tracker.set_releases_reported(self.enhanced_keyboard);

        Ok(())
    }

    fn poll_frame(&mut self, timeout: Duration) -> io::Result<InputFrame> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            let event = event::read()?;
            self.handle_event(event);
            if remaining.is_zero() {
                break;
            }
        }

        Ok(self.tracker.finish_tick())
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn close(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        // Run every step so raw mode is left even when an earlier one fails
        let mut stdout = io::stdout();
        let popped = if self.enhanced_keyboard {
            self.enhanced_keyboard = false;
            execute!(stdout, PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        };
        let restored = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();

        popped.and(restored).and(raw)
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        // Leave the terminal usable even if the loop bailed out early
        let _ = self.close();
    }
}

/// Window that replays a fixed sequence of input frames
///
/// Once the script runs out the window reports that it should close, so a
/// runner driving it terminates after the last scripted tick.
#[derive(Debug, Default)]
pub struct ScriptedWindow {
    frames: VecDeque<InputFrame>,
    opened: bool,
    closed: bool,
    close_requested: bool,
}

impl ScriptedWindow {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn was_opened(&self) -> bool {
        self.opened
    }

    pub fn was_closed(&self) -> bool {
        self.closed
    }

    /// Frames not yet consumed
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Window for ScriptedWindow {
    fn open(&mut self) -> io::Result<()> {
        self.opened = true;
        Ok(())
    }

    fn poll_frame(&mut self, _timeout: Duration) -> io::Result<InputFrame> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }

    fn should_close(&self) -> bool {
        self.close_requested || self.frames.is_empty()
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_window_runs_dry() {
        let mut window = ScriptedWindow::new([
            InputFrame::default().with_pressed(KeyCode::Char('e')),
            InputFrame::default(),
        ]);
        window.open().unwrap();
        assert!(!window.should_close());

        let first = window.poll_frame(Duration::ZERO).unwrap();
        assert!(first.is_pressed(KeyCode::Char('e')));
        assert!(!window.should_close());

        window.poll_frame(Duration::ZERO).unwrap();
        assert!(window.should_close());
        assert_eq!(window.remaining(), 0);
    }

    #[test]
    fn test_request_close() {
        let mut window = ScriptedWindow::new([InputFrame::default(), InputFrame::default()]);
        window.request_close();
        assert!(window.should_close());
    }

    #[test]
    fn test_terminal_window_ctrl_c_requests_close() {
        let mut window = TerminalWindow::new(WindowConfig::default());
        window.handle_event(Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(window.should_close());
    }
}
