use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{defaults, files};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub paths: PathsConfig,

    pub preprocess: PreprocessConfig,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Fallback filter directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw_dir: String,

    pub processed_dir: String,

    pub reports_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: "data/raw".to_string(),
            processed_dir: "data/processed".to_string(),
            reports_dir: "reports".to_string(),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn raw_anime(&self) -> PathBuf {
        Path::new(&self.raw_dir).join(files::RAW_ANIME)
    }

    #[must_use]
    pub fn raw_rating(&self) -> PathBuf {
        Path::new(&self.raw_dir).join(files::RAW_RATING)
    }

    #[must_use]
    pub fn processed_anime(&self) -> PathBuf {
        Path::new(&self.processed_dir).join(files::PROCESSED_ANIME)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Restrict the anime id space to anime that still have ratings after
    /// cleaning, dropping unrated anime from the processed table.
    pub drop_unrated_anime: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Minimum `members` for the rating ranking and residual picks
    pub popularity_floor: i64,

    pub top_n: usize,

    pub genre_limit: usize,

    /// Rows per residual pick list (under/over/conforming)
    pub pickup_count: usize,

    /// Maximum points embedded in the scatter chart
    pub scatter_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            popularity_floor: defaults::POPULARITY_FLOOR,
            top_n: defaults::TOP_N,
            genre_limit: defaults::GENRE_LIMIT,
            pickup_count: defaults::PICKUP_COUNT,
            scatter_limit: defaults::SCATTER_LIMIT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(Self::default_config_path());

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("anime-eda").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".anime-eda").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, dir) in [
            ("paths.raw_dir", &self.paths.raw_dir),
            ("paths.processed_dir", &self.paths.processed_dir),
            ("paths.reports_dir", &self.paths.reports_dir),
        ] {
            if dir.trim().is_empty() {
                anyhow::bail!("{name} cannot be empty");
            }
        }

        let report = &self.report;
        if report.top_n == 0
            || report.genre_limit == 0
            || report.pickup_count == 0
            || report.scatter_limit == 0
        {
            anyhow::bail!(
                "report.top_n, report.genre_limit, report.pickup_count and report.scatter_limit must be > 0"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report.popularity_floor, 1000);
        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.report.genre_limit, 20);
        assert!(!config.preprocess.drop_unrated_anime);
        assert_eq!(
            config.paths.processed_anime(),
            Path::new("data/processed").join("anime_processed.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[paths]"));
        assert!(toml_str.contains("[report]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [report]
            popularity_floor = 5000
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.report.popularity_floor, 5000);

        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.paths.raw_dir, "data/raw");
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.report.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.paths.reports_dir = "out".to_string();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.paths.reports_dir, "out");
    }
}
