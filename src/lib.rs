pub mod animation;
pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod headless;
pub mod logging;
pub mod math;
pub mod page;
pub mod physics;
pub mod scene;
pub mod scenes;
pub mod stage;
pub mod surface;

pub use animation::{AnimationLoop, LoopState};
pub use demo::{Demo, DemoKind, Rig};
pub use error::{Result, StageError};
pub use stage::Stage;
pub use surface::{RenderSurface, SurfaceOptions};
