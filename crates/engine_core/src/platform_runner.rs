// crates/engine_core/src/platform_runner.rs

use std::fmt;

use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::app::App;

#[derive(Debug)]
pub enum RunnerError {
    EventLoop(EventLoopError),
    Window(OsError),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::EventLoop(e) => write!(f, "event loop failed: {e}"),
            RunnerError::Window(e) => write!(f, "window creation failed: {e}"),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<EventLoopError> for RunnerError {
    fn from(e: EventLoopError) -> Self {
        RunnerError::EventLoop(e)
    }
}

impl From<OsError> for RunnerError {
    fn from(e: OsError) -> Self {
        RunnerError::Window(e)
    }
}

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the engine core.
pub struct PlatformRunner {
    app: App,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn start(self) -> Result<(), RunnerError> {
        let mut app = self.app;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&app.window_title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?;

        app.load();
        // The first measured frame would include startup time.
        app.tick_timer();

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        let frame_dt = app.tick_timer();
                        app.frame(frame_dt);
                    }
                    other => app.poller_mut().handle_event(&other),
                },
                Event::AboutToWait => window.request_redraw(),
                _ => {}
            }
        })?;

        Ok(())
    }
}
