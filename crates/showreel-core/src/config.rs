use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Color;
use crate::error::{ShowreelError, ShowreelResult};

/// Canvas and timing settings for a playback session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StageConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Nominal frame rate of the stepping loop; rendered frame counts
    /// are reported as durations against this rate.
    pub fps: f64,
    /// Idle background as a hex color string (e.g. "#101010"). Active
    /// compositions always clear to black before drawing; this color only
    /// shows while no composition is installed.
    pub background: String,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 30.0,
            background: "#000000".to_string(),
        }
    }
}

impl StageConfig {
    /// Parse the configured background hex string.
    pub fn background_color(&self) -> ShowreelResult<Color> {
        Color::from_hex(&self.background).map_err(|e| {
            ShowreelError::config(format!("bad background color '{}': {}", self.background, e))
        })
    }
}

/// A playback session description: stage, composition mode, and the
/// ordered list of clip directories to composite.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowreelConfig {
    #[serde(default)]
    pub stage: StageConfig,
    /// Composition mode: "nop" (sequential passthrough) | "crossfade".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Clip directories, each holding an ordered image sequence.
    #[serde(default)]
    pub clips: Vec<PathBuf>,
}

fn default_mode() -> String {
    "nop".to_string()
}

impl Default for ShowreelConfig {
    fn default() -> Self {
        Self {
            stage: StageConfig::default(),
            mode: default_mode(),
            clips: Vec::new(),
        }
    }
}

impl ShowreelConfig {
    pub fn load_from_file(path: &std::path::Path) -> ShowreelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ShowreelConfig = toml::from_str(&contents)
            .map_err(|e| ShowreelError::config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> ShowreelResult<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ShowreelError::config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
