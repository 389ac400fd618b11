use crate::demo::Demo;
use crate::frame::FrameInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    TornDown,
}

/// Explicit per-frame scheduler for every demo on the page
///
/// Each tick updates and redraws the registered demos in registration
/// order. Demos share no state, so order only affects logging.
pub struct AnimationLoop {
    demos: Vec<Demo>,
    state: LoopState,
    ticks: u64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            demos: Vec::new(),
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn register(&mut self, demo: Demo) {
        if self.state == LoopState::TornDown {
            log::warn!("ignoring {:?} demo registered after teardown", demo.kind());
            return;
        }
        self.demos.push(demo);
    }

    /// Run one tick; returns false once the loop is torn down
    pub fn tick(&mut self, frame: &FrameInfo) -> bool {
        if self.state == LoopState::TornDown {
            return false;
        }

        for demo in &mut self.demos {
            demo.tick(frame);
        }
        self.ticks += 1;
        true
    }

    /// Forward a container resize to every surface
    pub fn resize_all(&mut self) {
        for demo in &mut self.demos {
            demo.resize();
        }
    }

    /// Stop ticking and release every surface
    pub fn teardown(&mut self) {
        if self.state == LoopState::TornDown {
            return;
        }
        log::info!("animation loop torn down after {} ticks", self.ticks);
        self.demos.clear();
        self.state = LoopState::TornDown;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn demos(&self) -> &[Demo] {
        &self.demos
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}
