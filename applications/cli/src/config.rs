/// CLI configuration
use crate::error::{AppError, Result};
use podcastr_playback::{Episode, PlayerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub player: PlayerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    /// Catalogue the terminal can queue from
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default, rename = "loop")]
    pub looping: bool,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default = "default_normal_speed")]
    pub normal_speed: bool,

    /// Fixed shuffle seed; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl PlayerSettings {
    /// Initial store flags
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            looping: self.looping,
            shuffle: self.shuffle,
            normal_speed: self.normal_speed,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `podcastr.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, Self::environment())
    }

    /// Load with a specific environment source
    pub fn load_with(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
            None => settings
                .add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
        };

        // Override with environment variables, e.g. PODCASTR_PLAYER__SHUFFLE=true
        settings = settings.add_source(environment);

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Environment source for `PODCASTR_`-prefixed variables
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("PODCASTR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (index, episode) in self.episodes.iter().enumerate() {
            if episode.url.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "Episode {} ({:?}) has no url",
                    index, episode.title
                )));
            }

            if episode.duration == 0 {
                return Err(AppError::Config(format!(
                    "Episode {} ({:?}) has zero duration",
                    index, episode.title
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::Config("Logging level is empty".to_string()));
        }

        Ok(())
    }
}

// Default values
fn default_normal_speed() -> bool {
    true
}

fn default_level() -> String {
    "podcastr=info".to_string()
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            looping: false,
            shuffle: false,
            normal_speed: default_normal_speed(),
            seed: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(url: &str, duration: u64) -> Episode {
        Episode {
            title: "Pilot".to_string(),
            members: "Ana".to_string(),
            thumbnail: String::new(),
            duration,
            url: url.to_string(),
        }
    }

    #[test]
    fn defaults_match_a_fresh_player() {
        let config = AppConfig::default();
        assert_eq!(config.player.player_config(), PlayerConfig::default());
        assert_eq!(config.player.seed, None);
        assert_eq!(config.logging.level, "podcastr=info");
        assert!(config.episodes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_url() {
        let config = AppConfig {
            episodes: vec![episode("  ", 60)],
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let config = AppConfig {
            episodes: vec![episode("https://cdn.example.com/a.mp3", 0)],
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("zero duration"));
    }
}
