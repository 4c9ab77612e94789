//! Image hosting backends
//!
//! `ImgurClient` talks to the real API; `MockImageHost` answers in-process
//! and records what it was sent.

pub mod client;
pub mod mock;

pub use client::ImgurClient;
pub use mock::MockImageHost;

use crate::models::UploadResponse;
use crate::{Error, Result};
use async_trait::async_trait;

#[async_trait]
pub trait ImageHost: Send + Sync + 'static {
    /// Sends an already encoded base64 PNG payload under `client_id`.
    async fn upload_payload(&self, client_id: &str, payload: String) -> Result<UploadResponse>;
}

pub fn ensure_client_id(client_id: &str) -> Result<()> {
    if client_id.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "client ID must not be blank".to_string(),
        ));
    }
    Ok(())
}
