//! Network registry for storing and resolving sharing network definitions

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network key already registered
    #[error("duplicate network definition: {key}")]
    Duplicate { key: String },

    /// Key is empty or not a lowercase identifier
    #[error("invalid network key '{key}': keys must be non-empty lowercase identifiers")]
    InvalidKey { key: String },

    /// Alias target is not a registered network
    #[error("alias '{alias}' points at unknown network '{target}'")]
    DanglingAlias { alias: String, target: String },

    /// Alias collides with a registered network key
    #[error("alias '{alias}' collides with a registered network key")]
    AliasShadowsKey { alias: String },

    /// Error reading a network table file
    #[error("failed to read network table: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a network table
    #[error("failed to parse network table TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A sharing network definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// Lowercase identifier, unique within a registry
    pub key: String,
    /// Display name
    pub name: String,
    /// URL template with `{title}`, `{url}` and `{excerpt}` placeholders
    pub template: String,
    /// Brand colour, used as a display hint only
    #[serde(default)]
    pub color: Option<String>,
    /// Icon path relative to the icon base directory
    #[serde(default)]
    pub icon: Option<String>,
}

impl NetworkDefinition {
    /// Create a definition without colour or icon override
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            template: template.into(),
            color: None,
            icon: None,
        }
    }

    /// Set the brand colour
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set an explicit icon path
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A canonical network key, as returned by [`NetworkRegistry::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NetworkKey(String);

impl NetworkKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NetworkKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NetworkKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NetworkKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// TOML structure for deserializing network tables
#[derive(Deserialize)]
struct TomlRegistry {
    #[serde(default)]
    networks: Vec<NetworkDefinition>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Network table compiled into the crate
const BUILTIN_NETWORKS: &str = include_str!("networks.toml");

/// Registry of sharing networks and their aliases
///
/// Aliases always point directly at a registered key, so resolution takes at
/// most one hop.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDefinition>,
    index: HashMap<String, usize>,
    aliases: BTreeMap<String, String>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in networks
    pub fn builtin() -> Self {
        Self::from_str(BUILTIN_NETWORKS).expect("Built-in network table should be valid")
    }

    /// Load a registry from a TOML network table file
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a registry from a TOML network table
    pub fn from_str(content: &str) -> Result<Self, RegistryError> {
        let parsed: TomlRegistry = toml::from_str(content)?;

        let mut registry = Self::new();
        for def in parsed.networks {
            registry.register(def)?;
        }
        for (alias, target) in &parsed.aliases {
            registry.add_alias(alias, target)?;
        }
        Ok(registry)
    }

    /// Register a network definition
    pub fn register(&mut self, def: NetworkDefinition) -> Result<(), RegistryError> {
        if !is_valid_key(&def.key) {
            return Err(RegistryError::InvalidKey { key: def.key });
        }
        if self.index.contains_key(&def.key) {
            return Err(RegistryError::Duplicate { key: def.key });
        }
        if self.aliases.contains_key(&def.key) {
            return Err(RegistryError::AliasShadowsKey { alias: def.key });
        }

        self.index.insert(def.key.clone(), self.networks.len());
        self.networks.push(def);
        Ok(())
    }

    /// Add an alias for a registered network
    ///
    /// The target must be a registered key, not another alias.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<(), RegistryError> {
        let alias = alias.trim().to_lowercase();
        let target = target.trim().to_lowercase();

        if alias.is_empty() {
            return Err(RegistryError::InvalidKey { key: alias });
        }
        if self.index.contains_key(&alias) {
            return Err(RegistryError::AliasShadowsKey { alias });
        }
        if !self.index.contains_key(&target) {
            return Err(RegistryError::DanglingAlias { alias, target });
        }

        self.aliases.insert(alias, target);
        Ok(())
    }

    /// Sanitize a user-supplied key into a canonical network key
    ///
    /// Matching is case-insensitive and follows at most one alias. Returns
    /// `None` for networks this registry does not know.
    pub fn resolve(&self, key: &str) -> Option<NetworkKey> {
        let key = key.trim().to_lowercase();
        let key = match self.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        };

        if self.index.contains_key(&key) {
            Some(NetworkKey(key))
        } else {
            None
        }
    }

    /// Get the definition for a resolved key
    ///
    /// # Panics
    ///
    /// Panics if the key was not produced by this registry.
    pub fn get(&self, key: &NetworkKey) -> &NetworkDefinition {
        match self.index.get(key.as_str()) {
            Some(&i) => &self.networks[i],
            None => panic!("network key '{}' does not belong to this registry", key),
        }
    }

    /// Resolve a user-supplied key and return its definition
    pub fn find(&self, key: &str) -> Option<&NetworkDefinition> {
        self.resolve(key).map(|key| self.get(&key))
    }

    /// Check if a key (or alias) resolves to a network
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// All canonical keys in definition order
    pub fn all_keys(&self) -> Vec<NetworkKey> {
        self.networks
            .iter()
            .map(|def| NetworkKey(def.key.clone()))
            .collect()
    }

    /// All definitions in definition order
    pub fn definitions(&self) -> impl Iterator<Item = &NetworkDefinition> {
        self.networks.iter()
    }

    /// Alias pairs as `(alias, canonical key)`
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
