use folio_engine::{EntityTable, HtmlNormalizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid heading scale: {reason}")]
    InvalidHeadingScale { reason: String },
}

/// Font sizes for body text and heading levels 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingScale {
    pub body: f32,
    pub sizes: [f32; 4],
}

impl HeadingScale {
    /// Font size for a heading level. Levels outside 1..=4 are clamped.
    pub fn size_for(&self, level: u8) -> f32 {
        let idx = usize::from(level.clamp(1, 4)) - 1;
        self.sizes[idx]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = std::iter::once(self.body).chain(self.sizes);
        for size in all {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::InvalidHeadingScale {
                    reason: format!("font size {size} must be a positive number"),
                });
            }
        }
        Ok(())
    }
}

impl Default for HeadingScale {
    fn default() -> Self {
        Self {
            body: 16.0,
            sizes: [28.0, 24.0, 20.0, 18.0],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub heading_scale: HeadingScale,
    /// Extra named entities, e.g. `check = "✓"`. Keys may omit `&` and `;`.
    pub entities: BTreeMap<String, String>,
}

impl RenderConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: RenderConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.heading_scale.validate()?;

        log::debug!(
            "loaded config from {} ({} extra entities)",
            config_path.display(),
            config.entities.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Parses a TOML document without touching the filesystem.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: PathBuf::from("<inline>"),
                source,
            })?;
        config.heading_scale.validate()?;
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/folio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builtin entities plus the configured extras.
    pub fn entity_table(&self) -> EntityTable {
        EntityTable::with_extra(&self.entities)
    }

    pub fn normalizer(&self) -> HtmlNormalizer {
        HtmlNormalizer::new(self.entity_table())
    }
}
