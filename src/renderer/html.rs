//! HTML generation from rendered links

use crate::context::RenderedLink;

use super::HtmlOptions;

/// Build an HTML link list incrementally
pub struct HtmlBuilder {
    prefix: String,
    options: HtmlOptions,
    items: Vec<String>,
}

impl HtmlBuilder {
    /// Create a new builder using `prefix` for CSS classes
    pub fn new(prefix: impl Into<String>, options: HtmlOptions) -> Self {
        Self {
            prefix: prefix.into(),
            options,
            items: vec![],
        }
    }

    fn newline(&self) -> &str {
        if self.options.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a list item for one link
    pub fn add_link(&mut self, link: &RenderedLink) {
        let prefix = escape_html(&self.prefix);
        let key = escape_html(link.key.as_str());
        let name = escape_html(&link.name);

        let content = match &link.icon {
            Some(icon) if self.options.icons => {
                // Icon files are local assets, so their markup goes in as-is
                let mut content = if self.options.embeds_icons() {
                    icon.inline_markup.clone()
                } else {
                    format!(
                        r#"<img src="{}" alt="{}" class="{}icon-{}" />"#,
                        escape_html(&icon.url),
                        name,
                        prefix,
                        key
                    )
                };
                if self.options.show_captions {
                    content.push_str(&format!(
                        r#" <span class="{}caption-{}">{}</span>"#,
                        prefix, key, name
                    ));
                }
                content
            }
            _ => name,
        };

        let style = match (&link.color, self.options.brand_colors) {
            (Some(color), true) => {
                format!(r#" style="--{}color: {}""#, prefix, escape_html(color))
            }
            _ => String::new(),
        };

        self.items.push(format!(
            r#"<li class="{}{}"{}><a href="{}">{}</a></li>"#,
            prefix,
            key,
            style,
            escape_html(&link.url),
            content
        ));
    }

    /// Finish the list
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut html = if self.prefix.is_empty() {
            String::from("<ul>")
        } else {
            format!(r#"<ul class="{}list">"#, escape_html(&self.prefix))
        };
        for item in &self.items {
            html.push_str(nl);
            html.push_str(item);
        }
        html.push_str(nl);
        html.push_str("</ul>");
        html
    }
}

/// Render links as an HTML list
///
/// `prefix` is used when the options carry no class prefix of their own.
pub fn render_html(links: &[RenderedLink], options: &HtmlOptions, prefix: &str) -> String {
    let prefix = options.class_prefix.as_deref().unwrap_or(prefix);
    let mut builder = HtmlBuilder::new(prefix, options.clone());
    for link in links {
        builder.add_link(link);
    }
    builder.build()
}

/// Escape special HTML characters for text and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
