use std::path::{Path, PathBuf};
use std::fs;
use serde::{Deserialize, Serialize};

/// Latency thresholds used to grade successful pings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub good_threshold_ms: u64,
    pub fair_threshold_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            good_threshold_ms: 100,
            fair_threshold_ms: 200,
        }
    }
}

impl MetricsConfig {
    pub fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir()
            .ok_or("Could not find config directory")?
            .join("PingMetrics");

        Ok(config_dir.join("config.json"))
    }

    /// Load from the user config directory, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_or_default(&path),
            Ok(_) => MetricsConfig::default(),
            Err(e) => {
                log::warn!("Failed to get config path: {}", e);
                MetricsConfig::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str::<MetricsConfig>(&content)?)
    }

    fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Failed to load config {}: {}", path.display(), e);
            MetricsConfig::default()
        })
    }

    /// Save to the user config directory, creating it on first save.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path()?;
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
