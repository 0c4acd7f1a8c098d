//! HTML renderer for share links
//!
//! This module takes rendered links and produces an HTML list with
//! prefixed CSS classes for styling.

pub mod config;
pub mod html;

pub use config::HtmlOptions;
pub use html::{escape_html, render_html};
