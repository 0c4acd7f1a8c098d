//! Adapter for the older object-style interface
//!
//! Older callers set the page through `set_title`/`set_url`/`set_text`, pick
//! from a fixed list of networks, and ask for a key-to-URL map or an HTML
//! list with unprefixed classes. Everything is forwarded to [`ShareContext`].

use crate::context::ShareContext;
use crate::error::ShareError;
use crate::renderer::HtmlOptions;
use crate::Socialize;

/// Networks available through the legacy interface, also its default selection
pub const LEGACY_NETWORKS: &[&str] = &[
    "digg",
    "facebook",
    "linkedin",
    "pinterest",
    "reddit",
    "tumblr",
    "twitter",
];

/// Share links with the legacy interface
#[derive(Debug, Clone)]
pub struct LegacyShare {
    socialize: Socialize,
    title: Option<String>,
    url: Option<String>,
    text: Option<String>,
    networks: Vec<String>,
}

impl Default for LegacyShare {
    fn default() -> Self {
        Self::new()
    }
}

impl LegacyShare {
    /// Create an instance with every legacy network selected
    pub fn new() -> Self {
        Self {
            socialize: Socialize::new(),
            title: None,
            url: None,
            text: None,
            networks: LEGACY_NETWORKS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Create an instance with a network selection
    pub fn with_networks<S: AsRef<str>>(keys: &[S]) -> Self {
        let mut share = Self::new();
        share.set_networks(keys);
        share
    }

    /// Select networks, keeping only those the legacy interface offers
    pub fn set_networks<S: AsRef<str>>(&mut self, keys: &[S]) {
        self.networks = keys
            .iter()
            .filter_map(|k| {
                let k: &str = k.as_ref();
                LEGACY_NETWORKS.contains(&k).then(|| k.to_string())
            })
            .collect();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Set the page description
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    fn context(&self) -> ShareContext<'_> {
        let mut context = self.socialize.context();
        if let Some(title) = &self.title {
            context.set_title(title.as_str());
        }
        if let Some(url) = &self.url {
            context.set_url(url.as_str());
        }
        if let Some(text) = &self.text {
            context.set_excerpt(text.as_str());
        }
        context.select_networks(&self.networks);
        context
    }

    /// Share URLs as `(network key, url)` pairs
    pub fn links(&self) -> Result<Vec<(String, String)>, ShareError> {
        let links = self.context().render_links(false)?;
        Ok(links
            .into_iter()
            .map(|link| (link.key.to_string(), link.url))
            .collect())
    }

    /// HTML list of share links in a bare `<ul>`, classed by bare network key
    pub fn render(&self) -> Result<String, ShareError> {
        let options = HtmlOptions::new().with_class_prefix("");
        self.context().render_html(&options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share() -> LegacyShare {
        let mut share = LegacyShare::new();
        share.set_url("https://example.com/page");
        share.set_title("Page");
        share.set_text("About the page");
        share
    }

    #[test]
    fn test_default_networks() {
        let links = share().links().unwrap();
        let keys: Vec<&str> = links.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, LEGACY_NETWORKS);
    }

    #[test]
    fn test_set_networks_filters_to_legacy_list() {
        let mut share = share();
        share.set_networks(&["twitter", "email", "digg"]);
        let links = share.links().unwrap();
        let keys: Vec<&str> = links.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["twitter", "digg"]);
    }

    #[test]
    fn test_text_feeds_excerpt() {
        let mut share = LegacyShare::with_networks(&["tumblr"]);
        share.set_url("https://example.com");
        share.set_text("Some text");
        let links = share.links().unwrap();
        assert!(links[0].1.ends_with("&caption=Some%20text"));
    }

    #[test]
    fn test_render_uses_bare_classes() {
        let mut share = share();
        share.set_networks(&["reddit"]);
        let html = share.render().unwrap();
        assert!(html.starts_with("<ul>\n"));
        assert!(html.contains(r#"<li class="reddit"><a href=""#));
    }

    #[test]
    fn test_missing_url() {
        let share = LegacyShare::new();
        assert!(matches!(share.links(), Err(ShareError::MissingUrl)));
    }
}
