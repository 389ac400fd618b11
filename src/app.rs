use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::StageConfig;
use crate::core::SurfaceRenderer;
use crate::error::{Result, StageError};
use crate::frame::{FpsCounter, FrameIterator};
use crate::stage::Stage;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Window host: one winit window presenting the composed page
pub struct App {
    config: StageConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    stage: Option<Stage>,
    frames: FrameIterator,
    fps: FpsCounter,
    error: Option<StageError>,
}

impl App {
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            stage: None,
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            error: None,
        }
    }

    /// Fatal error that ended the event loop, if any
    pub fn take_error(&mut self) -> Option<StageError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: StageError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, window: Arc<Window>) -> Result<()> {
        let renderer = pollster::block_on(SurfaceRenderer::new(Arc::clone(&window)))?;
        let size = renderer.size();
        let stage = Stage::new(&self.config, size.width, size.height)?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.stage = Some(stage);
        self.frames = FrameIterator::new();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
        if let Some(stage) = &mut self.stage {
            stage.resize(width, height);
        }
    }

    /// One tick: update and redraw every demo, compose, present
    fn redraw(&mut self) -> Result<()> {
        let (Some(stage), Some(renderer)) = (&mut self.stage, &self.renderer) else {
            return Ok(());
        };

        let Some(frame) = self.frames.next() else {
            return Ok(());
        };
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::info!("FPS: {:.1}", fps);
        }

        match stage.frame(&frame) {
            Some(pixels) => renderer.render_pixels(&pixels),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init(window) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(stage) = &mut self.stage {
                    stage.teardown();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(()) => {}
                Err(StageError::SurfaceFrame(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                    log::warn!("surface lost; reconfiguring");
                    if let Some(renderer) = &self.renderer {
                        renderer.reconfigure();
                    }
                }
                Err(StageError::SurfaceFrame(wgpu::SurfaceError::OutOfMemory)) => {
                    self.fail(event_loop, StageError::SurfaceFrame(wgpu::SurfaceError::OutOfMemory));
                }
                Err(e) => log::warn!("frame dropped: {e}"),
            },
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
