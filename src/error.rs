//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. Every
//! variant wraps the original cause so callers can inspect it through
//! `std::error::Error::source`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Image encoding error: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// True when the underlying HTTP request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
