use serde::{Deserialize, Serialize};

/// Named keyboard keys.
///
/// Discriminants follow the GLFW key table so every named key fits the
/// tracker's 1024-entry key range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Key {
    Space = 32,
    A = 65,
    D = 68,
    E = 69,
    Q = 81,
    S = 83,
    W = 87,
    Escape = 256,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    LeftShift = 340,
    LeftControl = 341,
}

impl Key {
    /// Raw key code used by the tracker's key table
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    /// Auto-repeat while held. Does not change the recorded state.
    Repeat,
}

/// Window-library independent input message.
///
/// The application loop converts whatever its windowing layer delivers into
/// these and hands them to an [`InputHandler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { code: i32, action: KeyAction },
    CursorMoved { x: f32, y: f32 },
    Scroll { dx: f32, dy: f32 },
}

/// Receiver of push-style input events
pub trait InputHandler {
    /// A key changed state. `code` may be outside any range the handler tracks.
    fn on_key(&mut self, code: i32, action: KeyAction);

    /// The cursor moved to an absolute window position
    fn on_cursor_moved(&mut self, x: f32, y: f32);

    /// The scroll wheel or touchpad scrolled by the given amount (lines)
    fn on_scroll(&mut self, dx: f32, dy: f32);

    /// Dispatch a queued event to the matching handler method
    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { code, action } => self.on_key(code, action),
            InputEvent::CursorMoved { x, y } => self.on_cursor_moved(x, y),
            InputEvent::Scroll { dx, dy } => self.on_scroll(dx, dy),
        }
    }
}
