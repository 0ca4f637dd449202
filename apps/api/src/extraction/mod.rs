// Job extraction: site detection, selector fallback chains, and the polling
// schedule that copes with pages rendering asynchronously.

pub mod extractor;
pub mod handlers;
pub mod sites;
pub mod watcher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Not a supported job page: {0}")]
    UnsupportedSite(String),

    #[error("Required field '{0}' not found on page")]
    MissingField(&'static str),

    #[error("Failed to load page: {0}")]
    Fetch(String),
}
