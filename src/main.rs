use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use freelook::cli::Cli;
use freelook::config::Settings;
use freelook::core::clock::FrameClock;
use freelook::core::input_adapter::{CursorSource, WinitAdapter};
use freelook::core::input_tracker::InputTracker;
use freelook::core::timer::{fps_title, FpsCounter};
use freelook::core::window::WindowDimensions;
use freelook::scene::SceneState;
use freelook::traits::{Key, WindowContext};
use freelook::window::Window;

// === Application ===

struct App {
    settings: Settings,
    window: Option<Window>,
    focused: bool,
    dimensions: WindowDimensions,
    adapter: WinitAdapter,
    input: InputTracker,
    scene: SceneState,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            dimensions: WindowDimensions::new(settings.window.width, settings.window.height),
            scene: SceneState::from_settings(&settings),
            settings,
            window: None,
            focused: false,
            adapter: WinitAdapter::with_cursor_source(CursorSource::RawMotion),
            input: InputTracker::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::default(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.adapter.drain_into(&mut self.input);
        if self.input.is_pressed(Key::Escape) {
            event_loop.exit();
            return;
        }

        let frame = self.clock.tick();
        self.scene.update(&mut self.input, frame.delta);

        let camera = &self.scene.camera;
        if camera.is_degenerate() {
            log::warn!(
                "camera basis is degenerate at pitch {:.1} (pitch limit disabled?)",
                camera.pitch()
            );
        }

        if let Some(fps) = self.fps.tick(frame.delta) {
            if let Some(window) = &self.window {
                window.set_title(&fps_title(&self.settings.window.title, fps));
            }
            let position = camera.position();
            log::debug!(
                "frame {}: position ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1} fov {:.1}",
                frame.number,
                position.x,
                position.y,
                position.z,
                camera.yaw(),
                camera.pitch(),
                camera.zoom()
            );
            log::trace!(
                "view-projection: {:?}",
                self.scene.view_projection(self.dimensions.aspect_ratio())
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match Window::create(event_loop, &self.settings.window) {
            Ok(window) => {
                window.set_cursor_captured(true);
                self.focused = true;
                self.dimensions = window.dimensions();
                self.clock.reset();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.dimensions = size.into();
                log::debug!("resized to {}x{}", size.width, size.height);
            }
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                if let Some(window) = &self.window {
                    window.set_cursor_captured(focused);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.adapter.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion keeps arriving while the cursor is grabbed, and from
        // other windows while unfocused
        if self.window.is_some() && self.focused {
            self.adapter.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);

    log::info!("Controls: WASD to move, mouse to look, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
