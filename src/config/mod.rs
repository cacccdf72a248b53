//! Configuration file support.
//!
//! Loads user settings from `~/.config/vectorshop/config.toml` (or an
//! explicit path). The only settings today are the initial stroke and
//! background colors, selected by palette name. If no config file exists,
//! the documented defaults are used automatically.

pub mod types;

pub use types::DrawingConfig;

use crate::draw::palette;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// Deserialized from the TOML file; every field has a default, so a partial
/// or missing file is fine.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke = "void"
/// background = "white"
/// ```
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Initial color selection
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Loads configuration from the given path, or the default location
    /// when `path` is `None`.
    ///
    /// A missing file is not an error; defaults apply. A file that exists
    /// but fails to parse is an error, surfaced with the offending path.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => {
                    debug!("no config directory available, using defaults");
                    return Ok(Self::validated(Self::default()));
                }
            },
        };

        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::validated(Self::default()));
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        info!("loaded config from {}", path.display());
        Ok(Self::validated(config))
    }

    /// Replaces unknown palette names with the documented defaults,
    /// warning about each substitution.
    fn validated(mut config: Self) -> Self {
        if palette::index_of(&config.drawing.stroke).is_none() {
            warn!(
                "unknown stroke color '{}' in config, falling back to 'void'",
                config.drawing.stroke
            );
            config.drawing.stroke = "void".to_string();
        }
        if palette::index_of(&config.drawing.background).is_none() {
            warn!(
                "unknown background color '{}' in config, falling back to 'white'",
                config.drawing.background
            );
            config.drawing.background = "white".to_string();
        }
        config
    }

    /// Palette index of the configured stroke color.
    pub fn stroke_index(&self) -> usize {
        palette::index_of(&self.drawing.stroke).unwrap_or(palette::DEFAULT_STROKE_INDEX)
    }

    /// Palette index of the configured background color.
    pub fn background_index(&self) -> usize {
        palette::index_of(&self.drawing.background).unwrap_or(palette::DEFAULT_BACKGROUND_INDEX)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vectorshop").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_palette_slots() {
        let config = Config::default();
        assert_eq!(config.stroke_index(), 0);
        assert_eq!(config.background_index(), 2);
    }

    #[test]
    fn parses_partial_toml() {
        let config: Config = toml::from_str("[drawing]\nstroke = \"red\"\n").unwrap();
        let config = Config::validated(config);
        assert_eq!(config.stroke_index(), 3);
        assert_eq!(config.background_index(), 2);
    }

    #[test]
    fn unknown_color_names_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[drawing]\nstroke = \"mauve\"\nbackground = \"teal\"\n").unwrap();
        let config = Config::validated(config);
        assert_eq!(config.stroke_index(), 0);
        assert_eq!(config.background_index(), 2);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.stroke_index(), 0);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "drawing = not toml").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
