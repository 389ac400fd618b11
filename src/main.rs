use anyhow::Context;
use clap::Parser;
use winit::event_loop::EventLoop;

use physics_slides::app::App;
use physics_slides::cli::Cli;
use physics_slides::config::StageConfig;
use physics_slides::headless::{default_out_dir, run_headless};
use physics_slides::logging::{init_logging, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log_level {
        Some(level) => LoggingConfig::with_filter(level),
        None => LoggingConfig::default(),
    });

    let mut config = match &cli.config {
        Some(path) => StageConfig::load(path)?,
        None => StageConfig::default(),
    };
    cli.apply(&mut config);
    log::debug!("{config:?}");

    if cli.headless {
        let out_dir = config.snapshot.out_dir.clone().unwrap_or_else(default_out_dir);
        let written = run_headless(&config, &out_dir)
            .with_context(|| format!("headless run into {}", out_dir.display()))?;
        println!("wrote {} snapshots to {}", written.len(), out_dir.display());
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Physics Slides - Escape to quit");
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.take_error() {
        return Err(error.into());
    }
    Ok(())
}
