//! Per-request share context
//!
//! A [`ShareContext`] holds the page being shared and the networks selected
//! for output. It is built fresh for each render and never shared.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::content::{ContentItem, ContentSource};
use crate::error::ShareError;
use crate::icon::Icon;
use crate::network::NetworkKey;
use crate::renderer::{self, HtmlOptions};
use crate::template::{render_template, TemplateValues};
use crate::Socialize;

/// A page field substituted into templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Url,
    Excerpt,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
            Field::Excerpt => "excerpt",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLink {
    pub key: NetworkKey,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// The page being shared and the networks to share it on
#[derive(Debug, Clone)]
pub struct ShareContext<'a> {
    socialize: &'a Socialize,
    title: Option<String>,
    url: Option<String>,
    excerpt: Option<String>,
    networks: Vec<NetworkKey>,
}

impl<'a> ShareContext<'a> {
    /// Create an empty context with the default network selection
    pub fn new(socialize: &'a Socialize) -> Self {
        let mut context = Self {
            socialize,
            title: None,
            url: None,
            excerpt: None,
            networks: Vec::new(),
        };
        match &socialize.config().default_networks {
            Some(keys) => {
                context.select_networks(keys);
            }
            None => context.networks = socialize.registry().all_keys(),
        }
        context
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    /// Get a field's raw value
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title(),
            Field::Url => self.url(),
            Field::Excerpt => self.excerpt(),
        }
    }

    /// Set a field. Values are stored raw and encoded at render time.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        let value = Some(value.into());
        match field {
            Field::Title => self.title = value,
            Field::Url => self.url = value,
            Field::Excerpt => self.excerpt = value,
        }
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set_field(Field::Title, title)
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_field(Field::Url, url)
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) -> &mut Self {
        self.set_field(Field::Excerpt, excerpt)
    }

    /// Clear title, URL and excerpt. The network selection is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.title = None;
        self.url = None;
        self.excerpt = None;
        self
    }

    /// Replace the fields with a content item's metadata
    pub fn populate(&mut self, item: ContentItem) -> &mut Self {
        self.title = Some(item.title);
        self.url = Some(item.url);
        self.excerpt = item.excerpt;
        self
    }

    /// Fill the fields from a content item looked up by id
    ///
    /// The fields are cleared first, so a failed lookup leaves the context
    /// without a URL.
    pub fn populate_from(
        &mut self,
        source: &dyn ContentSource,
        id: &str,
    ) -> Result<&mut Self, ShareError> {
        self.reset();
        let item = source.lookup(id)?;
        Ok(self.populate(item))
    }

    /// Fill the fields from the host's current content item
    pub fn populate_current(
        &mut self,
        source: &dyn ContentSource,
    ) -> Result<&mut Self, ShareError> {
        self.reset();
        let item = source.current()?;
        Ok(self.populate(item))
    }

    /// Replace the network selection
    ///
    /// Keys are resolved through the registry. Unknown keys are dropped, and
    /// a network selected more than once (directly or through an alias) keeps
    /// only its first position.
    pub fn select_networks<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let socialize = self.socialize;
        let registry = socialize.registry();
        let mut seen = HashSet::new();
        self.networks.clear();

        for key in keys {
            let key = key.as_ref();
            match registry.resolve(key) {
                Some(resolved) => {
                    if seen.insert(resolved.clone()) {
                        self.networks.push(resolved);
                    }
                }
                None => tracing::debug!(network = key, "ignoring unsupported network"),
            }
        }
        self
    }

    /// The selected networks, in output order
    pub fn networks(&self) -> &[NetworkKey] {
        &self.networks
    }

    /// Render a share link for each selected network
    ///
    /// Fails only when no URL is set. Networks whose template renders to an
    /// empty URL are left out; icons that cannot be found are omitted from
    /// their link.
    pub fn render_links(&self, include_icons: bool) -> Result<Vec<RenderedLink>, ShareError> {
        let url = match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(ShareError::MissingUrl),
        };

        let values = TemplateValues {
            title: self.title.as_deref(),
            url: Some(url),
            excerpt: self.excerpt.as_deref(),
        };

        let registry = self.socialize.registry();
        let mut links = Vec::with_capacity(self.networks.len());

        for key in &self.networks {
            let def = registry.get(key);
            let rendered = render_template(&def.template, &values);

            if rendered.trim().is_empty() || def.name.trim().is_empty() {
                tracing::debug!(network = %key, "dropping network with empty link");
                continue;
            }

            let icon = if include_icons {
                self.socialize.icons().locate(def)
            } else {
                None
            };

            links.push(RenderedLink {
                key: key.clone(),
                name: def.name.clone(),
                url: rendered,
                color: def.color.clone(),
                icon,
            });
        }

        Ok(links)
    }

    /// Render the selected networks as an HTML list
    pub fn render_html(&self, options: &HtmlOptions) -> Result<String, ShareError> {
        let links = self.render_links(options.icons)?;
        Ok(renderer::render_html(
            &links,
            options,
            &self.socialize.config().class_prefix,
        ))
    }
}
