use crate::configuration::LoadingActivityConfiguration;
use crate::style::Axis;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings of the demo host.
/// Stored in the platform config directory (`$XDG_CONFIG_HOME/loading-activity/` or `%APPDATA%\loading-activity\`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial window size in logical pixels.
    pub window_width: f64,
    pub window_height: f64,
    /// Blur the host content under the panel with skia before egui paints.
    pub backdrop_blur: bool,
    pub overlay: LoadingActivityConfiguration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            backdrop_blur: true,
            overlay: LoadingActivityConfiguration::new(
                "Loading…",
                egui::FontId::proportional(17.0),
                Axis::Horizontal,
                8.0,
                0.6,
                egui::Color32::WHITE,
            ),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or return defaults.
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                log::info!(
                    "No config file at {}, using defaults. Creating default config.",
                    path.display()
                );
                let config = Self::default();
                config.save();
                config
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when there is no file at `path`.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    pub fn save(&self) {
        let path = config_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Failed to write config to {}: {}", path.display(), e);
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("loading-activity");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok();
    }
    dir.join("config.json")
}
