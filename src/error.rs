// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Empty search, no acceptable hit, or the site's 404 page.
    #[error("not found: {0}")]
    NotFound(String),

    /// Too few fields for the row layout, or an empty required field.
    #[error("malformed row: {0}")]
    MalformedRow(String),

    /// Network failure after the retry budget is spent, or an error status other than 404.
    #[error("transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("unexpected layout: {0}")]
    UnexpectedLayout(String),
}

impl ScrapeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
