//! Content access error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors for direct single-post lookups.
///
/// Bulk operations never surface these: an unreadable post is silently
/// dropped from listings, while an explicit lookup of the same slug
/// reports why it failed.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("post not found: `{0}`")]
    NotFound(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}
