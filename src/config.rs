//! Configuration surface
//!
//! Everything a host can override lives here: the default selection, icon
//! locations, the CSS class prefix, and extra networks or aliases layered on
//! top of the built-in table. Configuration is plain data, loaded from TOML or
//! assembled with the builder methods.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::icon::IconConfig;
use crate::network::{NetworkDefinition, RegistryError};

/// Default CSS class prefix for rendered markup
pub const DEFAULT_CLASS_PREFIX: &str = "socialize-";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid network configuration: {0}")]
    Registry(#[from] RegistryError),
}

/// Sharing configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Networks selected when the caller does not choose any.
    /// `None` selects every registered network.
    pub default_networks: Option<Vec<String>>,
    /// Prefix for CSS classes in rendered markup
    pub class_prefix: String,
    /// Icon locations
    pub icons: IconConfig,
    /// Extra networks appended to the built-in table
    pub networks: Vec<NetworkDefinition>,
    /// Extra aliases, `alias = "key"`
    pub aliases: BTreeMap<String, String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            default_networks: None,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            icons: IconConfig::default(),
            networks: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }
}

impl ShareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default network selection
    pub fn with_default_networks<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_networks = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Set the icon configuration
    pub fn with_icons(mut self, icons: IconConfig) -> Self {
        self.icons = icons;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Add an extra network
    pub fn with_network(mut self, def: NetworkDefinition) -> Self {
        self.networks.push(def);
        self
    }

    /// Add an extra alias
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }
}
