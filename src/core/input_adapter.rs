use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::controller::{InputEvent, InputHandler, Key, KeyAction};

/// Pixels of touchpad scrolling that count as one wheel line
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Where cursor positions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorSource {
    /// Absolute `WindowEvent::CursorMoved` positions
    #[default]
    Window,
    /// Raw `DeviceEvent::MouseMotion` summed into an unbounded virtual
    /// cursor. Keeps working while the cursor is grabbed.
    RawMotion,
}

/// Adapter that bridges Winit events to the [`InputHandler`] trait.
///
/// Window events are translated as they arrive and queued; the main loop
/// drains the queue into its handler once per frame.
#[derive(Debug, Clone, Default)]
pub struct WinitAdapter {
    queue: Vec<InputEvent>,
    cursor_source: CursorSource,
    /// Position of the virtual cursor driven by raw motion
    virtual_cursor: (f64, f64),
}

impl WinitAdapter {
    /// Create an adapter with an empty queue reading window cursor positions
    pub fn new() -> Self {
        Self::with_cursor_source(CursorSource::Window)
    }

    pub fn with_cursor_source(cursor_source: CursorSource) -> Self {
        Self {
            queue: Vec::new(),
            cursor_source,
            virtual_cursor: (0.0, 0.0),
        }
    }

    pub fn cursor_source(&self) -> CursorSource {
        self.cursor_source
    }

    /// Translate a Winit WindowEvent and queue it if it carries input
    pub fn process_event(&mut self, event: &WindowEvent) {
        if self.cursor_source == CursorSource::RawMotion
            && matches!(event, WindowEvent::CursorMoved { .. })
        {
            return;
        }
        if let Some(input) = Self::translate(event) {
            self.queue.push(input);
        }
    }

    /// Move the virtual cursor by raw mouse motion and queue its new position.
    ///
    /// Ignored unless the adapter reads [`CursorSource::RawMotion`].
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if self.cursor_source != CursorSource::RawMotion {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.virtual_cursor.0 += dx;
            self.virtual_cursor.1 += dy;
            self.queue.push(InputEvent::CursorMoved {
                x: self.virtual_cursor.0 as f32,
                y: self.virtual_cursor.1 as f32,
            });
        }
    }

    /// Queue an already translated event
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Number of events waiting for the next drain
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deliver every queued event to `handler` in arrival order
    pub fn drain_into<H: InputHandler>(&mut self, handler: &mut H) {
        for event in self.queue.drain(..) {
            handler.handle(event);
        }
    }

    /// Convert a window event into an input message, if it is one
    pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let key = Self::keycode_to_key(keycode)?;
                let action = match (event.state, event.repeat) {
                    (ElementState::Pressed, true) => KeyAction::Repeat,
                    (ElementState::Pressed, false) => KeyAction::Press,
                    (ElementState::Released, _) => KeyAction::Release,
                };
                Some(InputEvent::Key {
                    code: key.code(),
                    action,
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = Self::scroll_to_lines(*delta);
                Some(InputEvent::Scroll { dx, dy })
            }
            _ => None,
        }
    }

    /// Express a scroll delta in wheel lines
    pub fn scroll_to_lines(delta: MouseScrollDelta) -> (f32, f32) {
        match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(position) => (
                position.x as f32 / PIXELS_PER_LINE,
                position.y as f32 / PIXELS_PER_LINE,
            ),
        }
    }

    /// Map Winit KeyCode to Key
    pub fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyQ => Some(Key::Q),
            KeyCode::KeyE => Some(Key::E),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ShiftLeft => Some(Key::LeftShift),
            KeyCode::ControlLeft => Some(Key::LeftControl),
            KeyCode::Escape => Some(Key::Escape),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            _ => None,
        }
    }
}
