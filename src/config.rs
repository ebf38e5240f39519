//! Configuration file handling for glyph-match.
//!
//! Loads configuration from `<config dir>/glyph-match/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    CharacterSet, FontdueRasterizer, GlyphStyle, Preset, Resolution, DEFAULT_FONT,
    DEFAULT_GLYPH_RESOLUTION,
};
use crate::error::GlyphError;

/// Configuration file structure for glyph-match.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub charset: CharsetConfig,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_glyph_resolution")]
    pub glyph_resolution: u32,
    #[serde(default)]
    pub chars_in_row: Option<u32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            glyph_resolution: default_glyph_resolution(),
            chars_in_row: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CharsetConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub chars: Option<String>,
}

/// A font file registered under a name.
#[derive(Debug, Deserialize)]
pub struct FontEntry {
    pub name: String,
    pub path: PathBuf,
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

fn default_glyph_resolution() -> u32 {
    DEFAULT_GLYPH_RESOLUTION
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::from_toml(&content).map_err(|e| match e {
                ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.glyph_resolution == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.glyph_resolution",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.render.chars_in_row == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "render.chars_in_row",
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(name) = &self.charset.preset {
            if Preset::from_name(name).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "charset.preset",
                    message: format!(
                        "unknown preset '{}'. Available presets: digits, standard, blocks, minimal, printable",
                        name
                    ),
                });
            }
        }
        Ok(())
    }

    /// Candidate characters: explicit `chars` win over `preset`.
    pub fn character_set(&self) -> CharacterSet {
        if let Some(chars) = &self.charset.chars {
            return CharacterSet::from_chars(chars.chars());
        }
        self.charset
            .preset
            .as_deref()
            .and_then(Preset::from_name)
            .unwrap_or_default()
            .charset()
    }

    pub fn glyph_style(&self) -> GlyphStyle {
        GlyphStyle::new(self.render.font.clone(), self.render.glyph_resolution)
    }

    /// Width bounds for an image, seeded with `chars_in_row` when set.
    pub fn resolution_for(&self, img_width: u32, img_height: u32) -> Resolution {
        let res = Resolution::for_image(img_width, img_height);
        match self.render.chars_in_row {
            Some(requested) => res.with_chars_in_row(requested),
            None => res,
        }
    }

    /// A rasterizer with every configured font loaded.
    pub fn rasterizer(&self) -> Result<FontdueRasterizer, GlyphError> {
        let mut rasterizer = FontdueRasterizer::new();
        for entry in &self.fonts {
            rasterizer.add_font_file(entry.name.clone(), &entry.path)?;
        }
        Ok(rasterizer)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyph-match").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyph-match/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.glyph_style(), GlyphStyle::new("Courier New", 16));
        assert_eq!(config.character_set(), Preset::Digits.charset());
        assert!(config.fonts.is_empty());
    }

    #[test]
    fn test_chars_override_preset() {
        let config = Config::from_toml(
            r#"
            [charset]
            preset = "blocks"
            chars = "@. "
            "#,
        )
        .unwrap();
        assert_eq!(config.character_set().iter().collect::<String>(), " .@");
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = Config::from_toml("[render]\nglyph_resolution = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "render.glyph_resolution", .. }
        ));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let err = Config::from_toml("[charset]\npreset = \"emoji\"\n").unwrap_err();
        assert!(err.to_string().contains("emoji"));
    }
}
