//! URL template substitution
//!
//! Templates carry `{title}`, `{url}` and `{excerpt}` placeholders. Values are
//! percent-encoded once, at substitution time, so the stored fields stay raw.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters pass through, everything else is encoded
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Values substituted into a template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateValues<'a> {
    pub title: Option<&'a str>,
    pub url: Option<&'a str>,
    pub excerpt: Option<&'a str>,
}

impl<'a> TemplateValues<'a> {
    fn lookup(&self, placeholder: &str) -> Option<&'a str> {
        match placeholder {
            "title" => Some(self.title.unwrap_or("")),
            "url" => Some(self.url.unwrap_or("")),
            "excerpt" => Some(self.excerpt.unwrap_or("")),
            _ => None,
        }
    }
}

/// Percent-encode a single template value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Render a URL template
///
/// Known placeholders are replaced by the encoded value, or by nothing when
/// the value is absent. Other braces are copied through, and scanning resumes
/// right after each one so `{{url}}` still substitutes the inner placeholder.
///
/// # Example
///
/// ```rust
/// use socialize::template::{render_template, TemplateValues};
///
/// let values = TemplateValues {
///     title: Some("Hi & Bye"),
///     url: Some("https://example.com/a b"),
///     excerpt: None,
/// };
/// let url = render_template("https://twitter.com/intent/tweet?url={url}&text={title}", &values);
/// assert_eq!(
///     url,
///     "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fa%20b&text=Hi%20%26%20Bye"
/// );
/// ```
pub fn render_template(template: &str, values: &TemplateValues<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match values.lookup(name) {
                    Some(value) => {
                        out.push_str(&encode_component(value));
                        rest = &after[close + 1..];
                    }
                    // Keep the brace and rescan, a placeholder may follow it
                    None => {
                        out.push('{');
                        rest = after;
                    }
                }
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
