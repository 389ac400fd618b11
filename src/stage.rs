use crate::animation::AnimationLoop;
use crate::config::StageConfig;
use crate::core::DisplayContext;
use crate::demo::{Demo, DemoKind};
use crate::error::Result;
use crate::frame::FrameInfo;
use crate::math::to_rgba8;
use crate::page::Document;

/// The page: one container per demo, the loop that drives them, and the
/// composed output
pub struct Stage {
    document: Document,
    animation: AnimationLoop,
    background: [u8; 4],
}

impl Stage {
    /// Lay out one container per configured demo across a `width` x `height` page
    pub fn new(config: &StageConfig, width: u32, height: u32) -> Result<Self> {
        let options = config.surface_options()?;

        let mut kinds: Vec<DemoKind> = Vec::with_capacity(config.demos.len());
        for kind in &config.demos {
            if kinds.contains(kind) {
                log::warn!("{:?} listed twice; keeping the first", kind);
            } else {
                kinds.push(*kind);
            }
        }

        let mut document = Document::new();
        for kind in &kinds {
            document.create_element(kind.container_id());
        }
        document.layout(width, height);

        let mut animation = AnimationLoop::new();
        for kind in kinds {
            animation.register(Demo::new(kind, &document, options)?);
        }

        Ok(Self {
            document,
            animation,
            background: to_rgba8(options.background),
        })
    }

    /// Relayout the page and resize every surface; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.document.layout(width, height);
        self.animation.resize_all();
    }

    /// Run one tick and compose the page; `None` once torn down
    pub fn frame(&mut self, frame: &FrameInfo) -> Option<Vec<u8>> {
        if !self.animation.tick(frame) {
            return None;
        }
        Some(self.compose())
    }

    /// Copy every surface into an RGBA page buffer
    pub fn compose(&self) -> Vec<u8> {
        let sources = self.animation.demos().iter().map(|demo| {
            let surface = demo.surface();
            (surface.container().as_ref(), surface.pixels(), surface.viewport())
        });
        self.document.compose(self.background, sources)
    }

    pub fn size(&self) -> DisplayContext {
        self.document.size()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn teardown(&mut self) {
        self.animation.teardown();
    }
}
