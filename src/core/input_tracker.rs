use crate::traits::controller::{InputHandler, Key, KeyAction};

/// Number of key codes the tracker keeps state for
pub const KEY_CAPACITY: usize = 1024;

/// Recorded state of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Released,
    Pressed,
}

/// Turns push-style input events into pollable per-frame deltas.
///
/// Cursor and scroll movement accumulate between polls. Polling returns the
/// accumulated value and resets it to zero, so each delta must be polled at
/// most once per frame by a single consumer. Key state is a plain lookup and
/// can be read any number of times.
#[derive(Debug, Clone)]
pub struct InputTracker {
    keys: Box<[KeyState]>,
    /// Last absolute cursor position; `None` until the first cursor event
    last_cursor: Option<(f32, f32)>,
    cursor_delta: (f32, f32),
    scroll_delta: (f32, f32),
}

impl InputTracker {
    /// Create a tracker with every key released and no pending movement
    pub fn new() -> Self {
        Self {
            keys: vec![KeyState::Released; KEY_CAPACITY].into_boxed_slice(),
            last_cursor: None,
            cursor_delta: (0.0, 0.0),
            scroll_delta: (0.0, 0.0),
        }
    }

    /// Current state of `code`. Codes that were never pressed or lie outside
    /// the tracked range report `Released`.
    pub fn key_state(&self, code: i32) -> KeyState {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.keys.get(index))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.key_state(key.code()) == KeyState::Pressed
    }

    /// Take the cursor movement accumulated since the last poll.
    ///
    /// The vertical component grows upwards (screen y is inverted).
    pub fn poll_cursor_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.cursor_delta)
    }

    /// Take the scroll movement accumulated since the last poll
    pub fn poll_scroll_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Last absolute cursor position seen, if any
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.last_cursor
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler for InputTracker {
    fn on_key(&mut self, code: i32, action: KeyAction) {
        let Some(slot) = usize::try_from(code)
            .ok()
            .and_then(|index| self.keys.get_mut(index))
        else {
            return;
        };

        match action {
            KeyAction::Press => *slot = KeyState::Pressed,
            KeyAction::Release => *slot = KeyState::Released,
            KeyAction::Repeat => {}
        }
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        // The first event has nothing to diff against; it only seeds the position
        if let Some((last_x, last_y)) = self.last_cursor {
            self.cursor_delta.0 += x - last_x;
            self.cursor_delta.1 += last_y - y;
        }
        self.last_cursor = Some((x, y));
    }

    fn on_scroll(&mut self, dx: f32, dy: f32) {
        self.scroll_delta.0 += dx;
        self.scroll_delta.1 += dy;
    }
}
