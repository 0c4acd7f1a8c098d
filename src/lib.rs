//! Socialize - social network sharing links
//!
//! This library turns a page's title, URL and excerpt into share links for
//! social networks, either as structured records or as an HTML list.
//!
//! # Example
//!
//! ```rust
//! use socialize::{HtmlOptions, Socialize};
//!
//! let socialize = Socialize::new();
//! let mut context = socialize.context();
//! context
//!     .set_title("Hello")
//!     .set_url("https://example.com/hello")
//!     .select_networks(["twitter", "mail"]);
//!
//! let links = context.render_links(false).unwrap();
//! assert_eq!(links.len(), 2);
//!
//! let html = context.render_html(&HtmlOptions::default()).unwrap();
//! assert!(html.contains("socialize-twitter"));
//! ```

pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod icon;
pub mod legacy;
pub mod network;
pub mod renderer;
pub mod template;

pub use config::{ConfigError, ShareConfig};
pub use content::{ContentError, ContentItem, ContentSource, InMemoryContent};
pub use context::{Field, RenderedLink, ShareContext};
pub use error::ShareError;
pub use icon::{Icon, IconConfig, IconLocator};
pub use legacy::LegacyShare;
pub use network::{NetworkDefinition, NetworkKey, NetworkRegistry, RegistryError};
pub use renderer::HtmlOptions;

/// Network registry plus configuration, shared by every render
///
/// Build one per process (or per configuration) and create a
/// [`ShareContext`] from it for each page.
#[derive(Debug, Clone)]
pub struct Socialize {
    registry: NetworkRegistry,
    icons: IconLocator,
    config: ShareConfig,
}

impl Default for Socialize {
    fn default() -> Self {
        Self::new()
    }
}

impl Socialize {
    /// Built-in networks with the default configuration
    pub fn new() -> Self {
        let config = ShareConfig::default();
        Self {
            registry: NetworkRegistry::builtin(),
            icons: IconLocator::new(&config.icons),
            config,
        }
    }

    /// Built-in networks extended by a configuration
    pub fn with_config(config: ShareConfig) -> Result<Self, ConfigError> {
        Self::with_registry(NetworkRegistry::builtin(), config)
    }

    /// A custom registry extended by a configuration
    ///
    /// Extra networks and aliases from the configuration are added to the
    /// registry; conflicts with existing entries are errors.
    pub fn with_registry(
        mut registry: NetworkRegistry,
        config: ShareConfig,
    ) -> Result<Self, ConfigError> {
        for def in &config.networks {
            registry.register(def.clone())?;
        }
        for (alias, target) in &config.aliases {
            registry.add_alias(alias, target)?;
        }

        Ok(Self {
            icons: IconLocator::new(&config.icons),
            registry,
            config,
        })
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconLocator {
        &self.icons
    }

    /// Start an empty share context
    pub fn context(&self) -> ShareContext<'_> {
        ShareContext::new(self)
    }

    /// Start a share context for a content item
    pub fn context_for(
        &self,
        source: &dyn ContentSource,
        id: &str,
    ) -> Result<ShareContext<'_>, ShareError> {
        let mut context = self.context();
        context.populate_from(source, id)?;
        Ok(context)
    }

    /// Start a share context for the host's current content item
    pub fn current_context(
        &self,
        source: &dyn ContentSource,
    ) -> Result<ShareContext<'_>, ShareError> {
        let mut context = self.context();
        context.populate_current(source)?;
        Ok(context)
    }
}

/// Share URLs for a page on the given networks, with built-in defaults
///
/// # Example
///
/// ```rust
/// use socialize::share_links;
///
/// let links = share_links("Hi", "https://example.com", &["email"]).unwrap();
/// assert_eq!(links[0].url, "mailto:?subject=Hi&body=https%3A%2F%2Fexample.com");
/// ```
pub fn share_links<S: AsRef<str>>(
    title: &str,
    url: &str,
    networks: &[S],
) -> Result<Vec<RenderedLink>, ShareError> {
    let socialize = Socialize::new();
    let mut context = socialize.context();
    context.set_title(title).set_url(url).select_networks(networks);
    context.render_links(false)
}

/// HTML list of share links for a page, with built-in defaults
pub fn share_html<S: AsRef<str>>(
    title: &str,
    url: &str,
    networks: &[S],
    options: &HtmlOptions,
) -> Result<String, ShareError> {
    let socialize = Socialize::new();
    let mut context = socialize.context();
    context.set_title(title).set_url(url).select_networks(networks);
    context.render_html(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links_simple() {
        let links = share_links("Hello", "https://example.com", &["facebook"]).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].url,
            "https://www.facebook.com/sharer.php?u=https%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn test_share_links_missing_url() {
        let result = share_links("Hello", "", &["facebook"]);
        assert!(matches!(result, Err(ShareError::MissingUrl)));
    }

    #[test]
    fn test_share_html_simple() {
        let html = share_html(
            "Hello",
            "https://example.com",
            &["reddit"],
            &HtmlOptions::default(),
        )
        .unwrap();
        assert!(html.contains(r#"<li class="socialize-reddit">"#));
        assert!(html.contains(">Reddit</a>"));
    }

    #[test]
    fn test_config_extends_registry() {
        let config = ShareConfig::new()
            .with_network(NetworkDefinition::new(
                "mastodon",
                "Mastodon",
                "https://mastodonshare.com/?url={url}",
            ))
            .with_alias("toot", "mastodon");
        let socialize = Socialize::with_config(config).unwrap();
        assert!(socialize.registry().contains("toot"));
        assert!(socialize.registry().contains("twitter"));
    }

    #[test]
    fn test_config_conflict_is_error() {
        let config = ShareConfig::new().with_network(NetworkDefinition::new(
            "twitter",
            "Other",
            "{url}",
        ));
        let result = Socialize::with_config(config);
        assert!(matches!(
            result,
            Err(ConfigError::Registry(RegistryError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_context_for_unknown_item() {
        let socialize = Socialize::new();
        let result = socialize.context_for(&InMemoryContent::new(), "nope");
        assert!(matches!(result, Err(ShareError::ContentLookup(_))));
    }

    #[test]
    fn test_socialize_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Socialize>();
    }
}
