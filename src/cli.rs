use std::path::PathBuf;

use clap::Parser;

use crate::config::StageConfig;
use crate::demo::DemoKind;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "physics-slides")]
#[command(about = "Animated physics demos for the classical mechanics lecture", long_about = None)]
pub struct Cli {
    /// JSON stage configuration
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Demo to show; repeat for several (replaces the configured list)
    #[arg(long = "demo", value_enum, value_name = "KIND")]
    pub demos: Vec<DemoKind>,

    /// Render without a window and write PNG snapshots
    #[arg(long)]
    pub headless: bool,

    /// Frames to render in headless mode
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Snapshot interval in frames (0 writes only the last frame)
    #[arg(long, value_name = "K")]
    pub snapshot_every: Option<u64>,

    /// Snapshot directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Disable supersampled antialiasing
    #[arg(long)]
    pub no_antialias: bool,

    /// Log filter, e.g. `debug` or `physics_slides=trace`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut StageConfig) {
        if !self.demos.is_empty() {
            config.demos = self.demos.clone();
        }
        if let Some(frames) = self.frames {
            config.snapshot.frames = frames;
        }
        if let Some(every) = self.snapshot_every {
            config.snapshot.every = every;
        }
        if let Some(dir) = &self.out_dir {
            config.snapshot.out_dir = Some(dir.clone());
        }
        if self.no_antialias {
            config.antialias = false;
        }
    }
}
