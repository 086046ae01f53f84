use crate::core::window::WindowDimensions;

/// Window lifecycle and presentation abstraction
pub trait WindowContext {
    /// Request the window to redraw
    fn request_redraw(&self);

    /// Get the inner size of the window in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Replace the window title
    fn set_title(&self, title: &str);

    /// Hide and capture the cursor for mouse look, or give it back
    fn set_cursor_captured(&self, captured: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Mock window for testing trait implementation
    struct MockWindow {
        dims: WindowDimensions,
        titles: RefCell<Vec<String>>,
        redraw_called: RefCell<usize>,
        captured: RefCell<bool>,
    }

    impl MockWindow {
        fn new(width: u32, height: u32) -> Self {
            Self {
                dims: WindowDimensions::new(width, height),
                titles: RefCell::new(Vec::new()),
                redraw_called: RefCell::new(0),
                captured: RefCell::new(false),
            }
        }
    }

    impl WindowContext for MockWindow {
        fn request_redraw(&self) {
            *self.redraw_called.borrow_mut() += 1;
        }

        fn dimensions(&self) -> WindowDimensions {
            self.dims
        }

        fn set_title(&self, title: &str) {
            self.titles.borrow_mut().push(title.to_string());
        }

        fn set_cursor_captured(&self, captured: bool) {
            *self.captured.borrow_mut() = captured;
        }
    }

    fn show_fps(window: &dyn WindowContext, fps: f32) {
        window.set_title(&crate::core::timer::fps_title("Sandbox", fps));
    }

    #[test]
    fn test_window_context_through_trait_object() {
        let window = MockWindow::new(800, 600);

        show_fps(&window, 60.0);
        window.request_redraw();
        window.request_redraw();
        window.set_cursor_captured(true);

        assert_eq!(window.dimensions(), WindowDimensions::new(800, 600));
        assert_eq!(*window.titles.borrow(), vec!["Sandbox @ fps: 60.0"]);
        assert_eq!(*window.redraw_called.borrow(), 2);
        assert!(*window.captured.borrow());
    }
}
