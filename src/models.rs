//! Data models and structures
//!
//! Defines the raw HTTP response handed back by the direct upload path, the
//! outcome delivered to callbacks, and typed views of Imgur's JSON envelope.

use crate::Result;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A fully received HTTP response. Non-2xx statuses are represented here
/// rather than as errors so the service's error body stays readable.
#[derive(Debug, Clone)]
pub struct UploadResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl UploadResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Parses the body as Imgur's `{ data, success, status }` envelope.
    pub fn imgur(&self) -> Result<ImgurResponse<ImageData>> {
        self.json()
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

/// Successful outcome of a callback-based upload.
#[derive(Debug, Clone)]
pub struct Uploaded {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

// Imgur API response models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgurResponse<T> {
    pub data: T,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageData {
    pub id: Option<String>,
    pub link: Option<String>,
    pub deletehash: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Either a plain message or an object with a `message` field.
    pub error: Option<serde_json::Value>,
}

impl ImgurResponse<ImageData> {
    pub fn link(&self) -> Option<&str> {
        self.data.link.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.data.error.as_ref()? {
            serde_json::Value::String(message) => Some(message),
            serde_json::Value::Object(map) => map.get("message")?.as_str(),
            _ => None,
        }
    }
}
