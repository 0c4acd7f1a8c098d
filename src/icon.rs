//! Icon asset lookup
//!
//! One icon file per network, named after the network key, under a base
//! directory. Missing or unreadable icons are never an error: callers simply
//! get no icon.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::network::NetworkDefinition;

/// Where icon files live and how they are served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Public URL of the icon directory
    pub base_url: String,
    /// Filesystem directory holding the icon files
    pub base_path: PathBuf,
    /// File extension, including the leading dot
    pub extension: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_url: "icons/".to_string(),
            base_path: PathBuf::from("icons"),
            extension: ".svg".to_string(),
        }
    }
}

impl IconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the public icon URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the icon directory
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the icon file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// A located icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Filesystem path of the icon file
    pub path: PathBuf,
    /// Public URL of the icon
    pub url: String,
    /// Raw file content, for inlining
    pub inline_markup: String,
}

/// Resolves network definitions to icon files
#[derive(Debug, Clone)]
pub struct IconLocator {
    base_url: String,
    base_path: PathBuf,
    extension: String,
}

impl IconLocator {
    pub fn new(config: &IconConfig) -> Self {
        let mut base_url = config.base_url.clone();
        if !base_url.is_empty() && !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            base_path: config.base_path.clone(),
            extension: normalize_extension(&config.extension),
        }
    }

    /// Icon path relative to the base directory
    pub fn relative_path(&self, def: &NetworkDefinition) -> String {
        match &def.icon {
            Some(icon) => icon.trim_start_matches('/').to_string(),
            None => format!("{}{}", def.key, self.extension),
        }
    }

    /// Filesystem path of a network's icon, if the file exists
    pub fn path(&self, def: &NetworkDefinition) -> Option<PathBuf> {
        let path = self.base_path.join(self.relative_path(def));
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// Public URL of a network's icon, if the file exists
    pub fn url(&self, def: &NetworkDefinition) -> Option<String> {
        self.path(def)
            .map(|_| format!("{}{}", self.base_url, self.relative_path(def)))
    }

    /// Locate and load a network's icon
    pub fn locate(&self, def: &NetworkDefinition) -> Option<Icon> {
        let Some(path) = self.path(def) else {
            tracing::debug!(network = %def.key, "no icon file");
            return None;
        };

        let inline_markup = match read_icon(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(network = %def.key, path = %path.display(), error = %e, "failed to read icon");
                return None;
            }
        };

        Some(Icon {
            url: format!("{}{}", self.base_url, self.relative_path(def)),
            path,
            inline_markup,
        })
    }
}

impl Default for IconLocator {
    fn default() -> Self {
        Self::new(&IconConfig::default())
    }
}

fn read_icon(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.trim_end().to_string())
}

fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn twitter() -> NetworkDefinition {
        NetworkDefinition::new("twitter", "Twitter", "{url}")
    }

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.base_url, "icons/");
        assert_eq!(config.base_path, PathBuf::from("icons"));
        assert_eq!(config.extension, ".svg");
    }

    #[test]
    fn test_relative_path_from_key() {
        let locator = IconLocator::default();
        assert_eq!(locator.relative_path(&twitter()), "twitter.svg");
    }

    #[test]
    fn test_relative_path_override() {
        let locator = IconLocator::default();
        let def = twitter().with_icon("/brands/bird.svg");
        assert_eq!(locator.relative_path(&def), "brands/bird.svg");
    }

    #[test]
    fn test_extension_without_dot() {
        let locator = IconLocator::new(&IconConfig::new().with_extension("png"));
        assert_eq!(locator.relative_path(&twitter()), "twitter.png");
    }

    #[test]
    fn test_locate_existing_icon() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("twitter.svg"), "<svg>bird</svg>\n").unwrap();

        let config = IconConfig::new()
            .with_base_path(dir.path())
            .with_base_url("https://cdn.example.com/icons");
        let icon = IconLocator::new(&config).locate(&twitter()).expect("icon");

        assert_eq!(icon.path, dir.path().join("twitter.svg"));
        assert_eq!(icon.url, "https://cdn.example.com/icons/twitter.svg");
        assert_eq!(icon.inline_markup, "<svg>bird</svg>");
    }

    #[test]
    fn test_locate_missing_icon() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig::new().with_base_path(dir.path());
        let locator = IconLocator::new(&config);

        assert!(locator.locate(&twitter()).is_none());
        assert!(locator.path(&twitter()).is_none());
        assert!(locator.url(&twitter()).is_none());
    }

    #[test]
    fn test_unreadable_icon_is_omitted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("twitter.svg"), [0xff, 0xfe, 0x00, 0x3c]).unwrap();
        let locator = IconLocator::new(&IconConfig::new().with_base_path(dir.path()));

        assert!(locator.path(&twitter()).is_some());
        assert!(locator.locate(&twitter()).is_none());
    }

    #[test]
    fn test_directory_is_not_an_icon() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("twitter.svg")).unwrap();
        let config = IconConfig::new().with_base_path(dir.path());

        assert!(IconLocator::new(&config).locate(&twitter()).is_none());
    }
}
