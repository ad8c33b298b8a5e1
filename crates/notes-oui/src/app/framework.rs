//! Frame application framework

use std::io;
use std::time::{Duration, Instant};

use crate::app::window::Window;
use crate::input::InputFrame;
use crate::renderer::RenderBackend;
use crate::spatial::FirstPersonCamera;

/// Application driven one frame at a time
pub trait FrameApp {
    /// Application state type
    type State;

    /// Initialize application state
    fn init(&self) -> Self::State;

    /// Advance one tick with this frame's input, return true to continue, false to quit
    fn tick(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        camera: &mut FirstPersonCamera,
    ) -> bool;

    /// Render the application
    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend);
}

/// Fixed-rate loop tying a window, an app, and a render backend together
pub struct FrameRunner<A, W, B>
where
    A: FrameApp,
    W: Window,
    B: RenderBackend,
{
    app: A,
    window: W,
    backend: B,
    camera: FirstPersonCamera,
    tick_rate: Duration,
}

impl<A, W, B> FrameRunner<A, W, B>
where
    A: FrameApp,
    W: Window,
    B: RenderBackend,
{
    /// Create a new runner
    pub fn new(app: A, window: W, backend: B) -> Self {
        Self {
            app,
            window,
            backend,
            camera: FirstPersonCamera::default(),
            tick_rate: Duration::from_millis(16),
        }
    }

    /// Set the starting camera
    pub fn with_camera(mut self, camera: FirstPersonCamera) -> Self {
        self.camera = camera;
        self
    }

    /// Set tick rate
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    /// Run until the window or the app asks to close, returning the final state
    pub fn run(&mut self) -> io::Result<A::State> {
        if let Err(e) = self.window.open() {
            // Opening may fail halfway, after part of the display was taken
            let _ = self.window.close();
            return Err(e);
        }

        let result = self.run_loop();

        // Restore the display even when the loop failed
        let closed = self.window.close();
        let state = result?;
        closed?;

        Ok(state)
    }

    fn run_loop(&mut self) -> io::Result<A::State> {
        let mut state = self.app.init();
        let mut last_tick = Instant::now();

        while !self.window.should_close() {
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            let input = self.window.poll_frame(timeout)?;
            last_tick = Instant::now();

            if !self.app.tick(&mut state, &input, &mut self.camera) {
                self.window.request_close();
                break;
            }

            self.backend.set_camera(self.camera.clone());

            self.backend
                .begin_frame()
                .map_err(|e| io::Error::other(e.to_string()))?;

            self.app.render(&state, &mut self.backend);

            self.backend
                .end_frame()
                .map_err(|e| io::Error::other(e.to_string()))?;
        }

        Ok(state)
    }
}
