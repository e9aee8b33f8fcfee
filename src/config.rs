use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::LatLng;
use crate::error::{CatalogError, Result};
use crate::i18n::Locale;

const CONFIG_PATH: &str = "config.toml";

/// Runtime settings. Every section and field has a default, so an absent
/// or partial file is fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub assets: AssetsConfig,
    pub locator: LocatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale the UI starts in before the visitor picks one.
    pub default_locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the map page and its static files are served from.
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "assets".to_string(),
        }
    }
}

/// Fixed position for the `locate` command. Both coordinates must be set
/// for positioning to be available.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocatorConfig {
    pub fn position(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], except a missing file falls back to defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<Self> {
        if Path::new(CONFIG_PATH).exists() {
            Self::load()
        } else {
            Ok(Self::default())
        }
    }
}
