//! Configuration file
//!
//! Optional TOML file. The path comes from `VOLSTAGE_CONFIG`, falling back
//! to `volstage.toml` in the working directory; when neither exists the
//! defaults apply. Every field is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::media::sim::DEFAULT_LOAD_TICKS;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "VOLSTAGE_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "volstage.toml";

/// Errors while loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial volume of the bare control story
    pub initial_volume: i32,
    /// Show the percentage label next to the slider
    pub show_percentage: bool,
    /// Volume change per arrow key press
    pub step: u8,
    /// Directory for the log file
    pub log_dir: PathBuf,
    pub embed: EmbedConfig,
    pub video: VideoConfig,
    pub local_video: VideoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_volume: 50,
            show_percentage: true,
            step: 5,
            log_dir: PathBuf::from("."),
            embed: EmbedConfig::default(),
            video: VideoConfig::remote(),
            local_video: VideoConfig::local(),
        }
    }
}

/// Embedded player story
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    pub video_id: String,
    pub script_src: String,
    pub initial_volume: i32,
    /// Simulated ticks until the script, then the player, is ready
    pub load_ticks: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            video_id: "dQw4w9WgXcQ".to_string(),
            script_src: crate::media::DEFAULT_SCRIPT_SRC.to_string(),
            initial_volume: 60,
            load_ticks: DEFAULT_LOAD_TICKS,
        }
    }
}

/// Video element story
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    /// Sources tried in order
    pub sources: Vec<String>,
    pub initial_volume: i32,
    pub load_ticks: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self::remote()
    }
}

impl VideoConfig {
    fn remote() -> Self {
        Self {
            sources: vec![
                "https://www.learningcontainer.com/wp-content/uploads/2020/05/sample-mp4-file.mp4"
                    .to_string(),
                "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_5mb.mp4".to_string(),
            ],
            initial_volume: 70,
            load_ticks: DEFAULT_LOAD_TICKS,
        }
    }

    fn local() -> Self {
        Self {
            sources: vec![
                "public/my-video.mp4".to_string(),
                "https://www.learningcontainer.com/wp-content/uploads/2020/05/sample-mp4-file.mp4"
                    .to_string(),
            ],
            initial_volume: 60,
            load_ticks: DEFAULT_LOAD_TICKS,
        }
    }
}

impl Config {
    /// Load from `VOLSTAGE_CONFIG`, then `volstage.toml`, then defaults.
    ///
    /// A path named by the environment variable must exist.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_path(fallback)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Arrow-key step, never 0
    pub fn step(&self) -> u8 {
        self.step.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_defaults_match_stories() {
        let config = Config::default();
        assert_eq!(config.initial_volume, 50);
        assert!(config.show_percentage);
        assert_eq!(config.embed.initial_volume, 60);
        assert_eq!(config.video.initial_volume, 70);
        assert_eq!(config.local_video.initial_volume, 60);
        assert_eq!(config.embed.script_src, "https://www.youtube.com/iframe_api");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            initial_volume = 80
            show_percentage = false

            [embed]
            video_id = "abc123"

            [video]
            sources = ["clip.mp4"]
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_volume, 80);
        assert!(!config.show_percentage);
        assert_eq!(config.embed.video_id, "abc123");
        assert_eq!(config.embed.initial_volume, 60);
        assert_eq!(config.video.sources, vec!["clip.mp4"]);
        assert_eq!(config.video.initial_volume, 70);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml("volume = 3").is_err());
    }

    #[test]
    fn test_step_never_zero() {
        let config = Config::from_toml("step = 0").unwrap();
        assert_eq!(config.step(), 1);
    }

    #[test]
    fn test_from_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volstage.toml");
        std::fs::write(&path, "show_percentage = \"yes\"").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("volstage.toml"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volstage.toml");
        std::fs::write(&path, "step = 10\n[local_video]\ninitial_volume = 30\n").unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.step(), 10);
        assert_eq!(config.local_video.initial_volume, 30);
    }
}
