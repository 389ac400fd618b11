use std::path::{Path, PathBuf};

use crate::config::StageConfig;
use crate::error::Result;
use crate::frame::FixedFrames;
use crate::stage::Stage;

/// Frame rate of headless runs
pub const HEADLESS_HZ: f32 = 60.0;

/// `snapshots-YYYYmmdd-HHMMSS` in the working directory
pub fn default_out_dir() -> PathBuf {
    PathBuf::from(format!("snapshots-{}", chrono::Local::now().format("%Y%m%d-%H%M%S")))
}

/// Whether frame `number` of a `total`-frame run gets a snapshot
pub fn is_snapshot_frame(number: u64, every: u64, total: u64) -> bool {
    let last = number + 1 == total;
    if every == 0 {
        return last;
    }
    (number + 1) % every == 0 || last
}

/// Tick the stage at a fixed rate without a window, writing PNG snapshots
///
/// Returns the paths written, in frame order.
pub fn run_headless(config: &StageConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let window = &config.window;
    let mut stage = Stage::new(config, window.width, window.height)?;
    let size = stage.size();
    let total = config.snapshot.frames;

    std::fs::create_dir_all(out_dir)?;
    log::info!(
        "headless: {} frames at {}x{}, snapshot every {} into {}",
        total,
        size.width,
        size.height,
        config.snapshot.every,
        out_dir.display()
    );

    let mut written = Vec::new();
    for frame in FixedFrames::new(HEADLESS_HZ).take(total as usize) {
        let Some(pixels) = stage.frame(&frame) else {
            break;
        };
        if !is_snapshot_frame(frame.number, config.snapshot.every, total) {
            continue;
        }

        let path = out_dir.join(format!("frame-{:05}.png", frame.number));
        image::save_buffer(&path, &pixels, size.width, size.height, image::ExtendedColorType::Rgba8)?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    stage.teardown();
    log::info!("headless run wrote {} snapshots", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_schedule() {
        let picked: Vec<u64> = (0..10).filter(|&n| is_snapshot_frame(n, 4, 10)).collect();
        assert_eq!(picked, vec![3, 7, 9]);

        let last_only: Vec<u64> = (0..5).filter(|&n| is_snapshot_frame(n, 0, 5)).collect();
        assert_eq!(last_only, vec![4]);
    }

    #[test]
    fn default_dir_is_timestamped() {
        let name = default_out_dir().to_string_lossy().into_owned();
        assert!(name.starts_with("snapshots-"));
        assert_eq!(name.len(), "snapshots-".len() + 15);
    }
}
