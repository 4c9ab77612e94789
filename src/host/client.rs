use super::{ensure_client_id, ImageHost};
use crate::codec;
use crate::config::UploaderConfig;
use crate::models::UploadResponse;
use crate::Result;
use async_trait::async_trait;
use image::DynamicImage;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;

/// Imgur REST client for anonymous (`Client-ID`) image uploads.
#[derive(Clone)]
pub struct ImgurClient {
    client: Client,
    config: UploaderConfig,
}

impl ImgurClient {
    pub fn new() -> Self {
        Self::from_config(UploaderConfig::default())
    }

    pub fn from_config(config: UploaderConfig) -> Self {
        Self::new_with_client(config, Client::new())
    }

    /// Reuses an existing connection pool. Timeout and user agent still come
    /// from `config` and are applied per request.
    pub fn new_with_client(config: UploaderConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Encodes `image` and posts it, returning the response whatever its
    /// status code or content type.
    ///
    /// Fails with [`crate::Error::InvalidArgument`] before any I/O when the
    /// client ID is blank or the image has no pixels. Encoding runs on the
    /// blocking pool against a copy of `image`.
    pub async fn upload(&self, client_id: &str, image: &DynamicImage) -> Result<UploadResponse> {
        ensure_client_id(client_id)?;
        codec::ensure_image(image)?;
        let payload = codec::encode_on_blocking_pool(Arc::new(image.clone())).await?;

        tracing::debug!(
            "Encoded {}x{} image into {} base64 bytes",
            image.width(),
            image.height(),
            payload.len()
        );

        self.upload_payload(client_id, payload).await
    }
}

impl Default for ImgurClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for ImgurClient {
    async fn upload_payload(&self, client_id: &str, payload: String) -> Result<UploadResponse> {
        ensure_client_id(client_id)?;

        let url = self.config.upload_url();
        tracing::debug!("Posting image to {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.config.timeout)
            .header(USER_AGENT, &self.config.user_agent)
            .header(AUTHORIZATION, format!("Client-ID {}", client_id))
            .form(&[("image", payload)])
            .send()
            .await?;

        let response = UploadResponse::read(response).await?;
        tracing::debug!("Imgur responded with status {}", response.status());

        Ok(response)
    }
}
