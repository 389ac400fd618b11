//! Stage configuration, loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid config and a partial file
//! only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::demo::DemoKind;
use crate::error::{Result, StageError};
use crate::math::{hex_to_rgb, Rgb};
use crate::surface::SurfaceOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            title: "Physics Slides".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Ticks to run in headless mode
    pub frames: u64,
    /// Write a PNG every this many frames; 0 writes only the last frame
    pub every: u64,
    /// Output directory; a timestamped directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            every: 30,
            out_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub window: WindowConfig,
    /// Page and surface clear color as `#rrggbb`
    pub background: String,
    pub antialias: bool,
    pub supersample: u32,
    pub demos: Vec<DemoKind>,
    pub snapshot: SnapshotConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            background: "#000000".to_string(),
            antialias: true,
            supersample: 2,
            demos: DemoKind::LECTURE.to_vec(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl StageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StageError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.surface_options()?;
        Ok(config)
    }

    pub fn background_rgb(&self) -> Result<Rgb> {
        parse_hex_color(&self.background)
    }

    /// Validated surface options; supersample must lie in `1..=MAX_SUPERSAMPLE`
    pub fn surface_options(&self) -> Result<SurfaceOptions> {
        let options = SurfaceOptions {
            antialias: self.antialias,
            supersample: self.supersample,
            background: self.background_rgb()?,
        };
        options.validate()?;
        Ok(options)
    }
}

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(text: &str) -> Result<Rgb> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 {
        return Err(StageError::InvalidColor(text.to_string()));
    }
    u32::from_str_radix(digits, 16)
        .map(hex_to_rgb)
        .map_err(|_| StageError::InvalidColor(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = StageConfig::from_json("{}").expect("config");
        assert_eq!(config, StageConfig::default());
        assert_eq!(config.demos, DemoKind::LECTURE.to_vec());
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let config = StageConfig::from_json(
            r##"{
                "window": { "width": 800 },
                "background": "#0d1117",
                "demos": ["chaotic-pendulum"],
                "snapshot": { "every": 10, "out_dir": "shots" }
            }"##,
        )
        .expect("config");

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.demos, vec![DemoKind::ChaoticPendulum]);
        assert_eq!(config.snapshot.every, 10);
        assert_eq!(config.snapshot.frames, 120);
        assert_eq!(config.snapshot.out_dir, Some(PathBuf::from("shots")));
        assert_eq!(config.background_rgb().expect("color"), hex_to_rgb(0x0d1117));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = StageConfig::from_json(r#"{ "background": "blue" }"#).expect_err("bad color");
        assert!(matches!(err, StageError::InvalidColor(c) if c == "blue"));
        assert!(parse_hex_color("#12345g").is_err());
        assert_eq!(parse_hex_color("ff0000").expect("color"), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_demo_is_a_parse_error() {
        let err = StageConfig::from_json(r#"{ "demos": ["juggler"] }"#).expect_err("unknown demo");
        assert!(matches!(err, StageError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = StageConfig::load(Path::new("/nonexistent/stage.json")).expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/stage.json"));
    }

    #[test]
    fn supersample_out_of_range_is_rejected() {
        for text in [r#"{ "supersample": 200 }"#, r#"{ "supersample": 0 }"#, r#"{ "supersample": 5 }"#] {
            let err = StageConfig::from_json(text).expect_err("out of range");
            assert!(matches!(err, StageError::InvalidSupersample { max: 4, .. }), "{text}");
        }
    }

    #[test]
    fn surface_options_carry_config_fields() {
        let config = StageConfig { supersample: 4, antialias: false, ..StageConfig::default() };
        let options = config.surface_options().expect("options");
        assert_eq!(options.supersample, 4);
        assert!(!options.antialias);
    }
}
