//! Configuration for HTML rendering

/// Options for rendering share links as an HTML list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Show an icon instead of the network name
    pub icons: bool,

    /// Inline the icon file's content instead of an `<img>` reference.
    /// Only applies when `icons` is set.
    pub embed_icon: bool,

    /// Add the network name after the icon
    pub show_captions: bool,

    /// Expose each network's brand colour as a CSS custom property
    pub brand_colors: bool,

    /// Prefix for CSS class names (e.g., "socialize-" for "socialize-twitter").
    /// Falls back to the configured prefix when unset.
    pub class_prefix: Option<String>,

    /// Put each list item on its own line
    pub pretty_print: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            icons: false,
            embed_icon: false,
            show_captions: false,
            brand_colors: false,
            class_prefix: None,
            pretty_print: true,
        }
    }
}

impl HtmlOptions {
    /// Create options with default values (text links)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether icons replace the link text
    pub fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    /// Set whether icon files are inlined
    pub fn with_embed_icon(mut self, embed: bool) -> Self {
        self.embed_icon = embed;
        self
    }

    /// Set whether captions follow icons
    pub fn with_captions(mut self, captions: bool) -> Self {
        self.show_captions = captions;
        self
    }

    /// Set whether brand colours are emitted
    pub fn with_brand_colors(mut self, colors: bool) -> Self {
        self.brand_colors = colors;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Whether inlined icon markup should be used
    pub(crate) fn embeds_icons(&self) -> bool {
        self.icons && self.embed_icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HtmlOptions::default();
        assert!(!options.icons);
        assert!(!options.embed_icon);
        assert!(!options.show_captions);
        assert!(!options.brand_colors);
        assert!(options.pretty_print);
        assert_eq!(options.class_prefix, None);
    }

    #[test]
    fn test_builder_pattern() {
        let options = HtmlOptions::new()
            .with_icons(true)
            .with_embed_icon(true)
            .with_captions(true)
            .with_brand_colors(true)
            .with_class_prefix("share-")
            .with_pretty_print(false);

        assert!(options.icons);
        assert!(options.embeds_icons());
        assert!(options.show_captions);
        assert!(options.brand_colors);
        assert!(!options.pretty_print);
        assert_eq!(options.class_prefix, Some("share-".to_string()));
    }

    #[test]
    fn test_embed_requires_icons() {
        let options = HtmlOptions::new().with_embed_icon(true);
        assert!(!options.embeds_icons());
    }
}
