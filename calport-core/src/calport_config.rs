//! Global calport configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalportError, CalportResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/calport";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/calport/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CalportConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Color attached to events that arrive without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,

    /// Color attached to events pulled from the holiday feed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_color: Option<String>,

    /// iCalendar feed to pull public holidays from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_feed_url: Option<String>,
}

impl CalportConfig {
    pub fn load() -> CalportResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalportError::Config(e.to_string()))
    }

    pub fn config_path() -> CalportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalportError::Config("Could not determine config directory".into()))?
            .join("calport");

        Ok(config_dir.join("config.toml"))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> CalportResult<()> {
        let contents = format!(
            "\
# calport configuration

# Where your events are stored:
# data_dir = \"{}\"

# Color given to imported events:
# default_color = \"#3b82f6\"

# Color given to holidays:
# holiday_color = \"#ef4444\"

# Holiday feed for `calport holidays`:
# holiday_feed_url = \"https://www.thunderbird.net/media/caldata/autogen/GermanHolidays.ics\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        CalportConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: CalportConfig = toml::from_str(&content).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("~/.local/share/calport"));
        assert!(config.default_color.is_none());
        assert!(config.holiday_color.is_none());
        assert!(config.holiday_feed_url.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: CalportConfig = toml::from_str(
            "data_dir = \"/tmp/calport\"\n\
             default_color = \"#3b82f6\"\n\
             holiday_feed_url = \"https://example.com/holidays.ics\"\n",
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/calport"));
        assert_eq!(config.default_color.as_deref(), Some("#3b82f6"));
        assert_eq!(
            config.holiday_feed_url.as_deref(),
            Some("https://example.com/holidays.ics")
        );
    }

    #[test]
    fn data_path_expands_tilde() {
        let config: CalportConfig = toml::from_str("data_dir = \"~/calport-data\"").unwrap();
        let path = config.data_path();

        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.to_string_lossy().ends_with("calport-data"));
    }

    #[test]
    fn unset_options_are_not_serialized() {
        let config: CalportConfig = toml::from_str("").unwrap();
        assert_eq!(toml::to_string_pretty(&config).unwrap(), "");
    }
}
