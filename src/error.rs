//! Error types for rendering share links

use thiserror::Error;

use crate::content::ContentError;

/// Errors that make a whole render meaningless
///
/// Per-network problems (unknown keys, missing icons, templates that render
/// to nothing) are not errors; those networks are left out of the output.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Rendering attempted without a URL to share
    #[error("missing URL: set a URL before rendering share links")]
    MissingUrl,

    /// The host could not supply the content item
    #[error(transparent)]
    ContentLookup(#[from] ContentError),
}
