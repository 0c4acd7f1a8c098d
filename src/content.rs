//! Content lookup boundary
//!
//! The host owns its content. It hands this crate a title, a canonical URL and
//! a plain-text excerpt through [`ContentSource`]; lookup failures are passed
//! back to the caller unchanged.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors reported by a content source
#[derive(Debug, Error)]
pub enum ContentError {
    /// No content item with this identifier
    #[error("content item not found: {id}")]
    NotFound { id: String },

    /// The host has no current content item
    #[error("no current content item")]
    NoCurrentItem,

    /// Host-specific failure
    #[error("content lookup failed: {0}")]
    Host(String),
}

/// Page metadata supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Body HTML, summarized when no excerpt is given
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            excerpt: None,
            content: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Fill a missing excerpt from the body
    ///
    /// The body is reduced to plain text and cut to [`EXCERPT_WORDS`] words.
    /// An explicit excerpt, even an empty one, is left alone.
    pub fn with_fallback_excerpt(mut self) -> Self {
        if self.excerpt.is_none() {
            self.excerpt = self
                .content
                .as_deref()
                .map(|body| plain_excerpt(body, EXCERPT_WORDS, EXCERPT_MORE))
                .filter(|excerpt| !excerpt.is_empty());
        }
        self
    }
}

/// Host capability for looking up content items
pub trait ContentSource {
    /// Look up a content item by identifier
    fn lookup(&self, id: &str) -> Result<ContentItem, ContentError>;

    /// The item currently being rendered by the host
    fn current(&self) -> Result<ContentItem, ContentError>;
}

/// A content source backed by a map
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    items: HashMap<String, ContentItem>,
    current: Option<String>,
}

/// TOML structure for content files
#[derive(Deserialize)]
struct TomlContent {
    current: Option<String>,
    #[serde(default)]
    items: HashMap<String, ContentItem>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item
    pub fn insert(&mut self, id: impl Into<String>, item: ContentItem) {
        self.items.insert(id.into(), item);
    }

    /// Mark an item as the current one
    pub fn set_current(&mut self, id: impl Into<String>) {
        self.current = Some(id.into());
    }

    /// Load items from a TOML file
    ///
    /// ```toml
    /// current = "home"
    ///
    /// [items.home]
    /// title = "Home"
    /// url = "https://example.com/"
    /// excerpt = "Welcome"
    /// ```
    ///
    /// Items without an `excerpt` get one from their `content` body.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ContentError::Host(e.to_string()))?;
        Self::from_str(&content)
    }

    /// Load items from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ContentError> {
        let parsed: TomlContent =
            toml::from_str(content).map_err(|e| ContentError::Host(e.to_string()))?;
        Ok(Self {
            items: parsed.items,
            current: parsed.current,
        })
    }
}

impl ContentSource for InMemoryContent {
    fn lookup(&self, id: &str) -> Result<ContentItem, ContentError> {
        self.items
            .get(id)
            .cloned()
            .map(ContentItem::with_fallback_excerpt)
            .ok_or_else(|| ContentError::NotFound { id: id.to_string() })
    }

    fn current(&self) -> Result<ContentItem, ContentError> {
        let id = self.current.as_deref().ok_or(ContentError::NoCurrentItem)?;
        self.lookup(id)
    }
}

/// Default excerpt length in words
pub const EXCERPT_WORDS: usize = 55;

/// Default suffix for truncated excerpts
pub const EXCERPT_MORE: &str = " [\u{2026}]";

/// Build a plain-text excerpt from HTML content
///
/// Strips tags, collapses whitespace and keeps at most `word_limit` words,
/// appending `more` when anything was cut.
///
/// ```rust
/// use socialize::content::plain_excerpt;
///
/// let excerpt = plain_excerpt("<p>One <b>two</b> three</p>", 2, "...");
/// assert_eq!(excerpt, "One two...");
/// ```
pub fn plain_excerpt(html: &str, word_limit: usize, more: &str) -> String {
    let text = strip_tags(html);
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() > word_limit {
        format!("{}{}", words[..word_limit].join(" "), more)
    } else {
        words.join(" ")
    }
}

/// Remove HTML tags, keeping element text
///
/// Only `<` followed by a letter, `/` or `!` opens a tag, so text like
/// `5 < 6` survives.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag
                && chars
                    .peek()
                    .is_some_and(|n| n.is_ascii_alphabetic() || *n == '/' || *n == '!') =>
            {
                in_tag = true
            }
            // Tags separate words: "a<br>b" is two words
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
