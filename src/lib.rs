//! Upload in-memory images to Imgur
//!
//! Images are encoded as base64 PNG and posted to the anonymous upload
//! endpoint with a `Client-ID` credential. [`ImgurClient::upload`] returns the
//! raw response directly; [`Uploader::upload`] returns immediately and reports
//! the parsed outcome to a callback once the request completes.

pub mod codec;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod uploader;

pub use config::UploaderConfig;
pub use error::{Error, Result};
pub use host::{ImageHost, ImgurClient, MockImageHost};
pub use models::{ImageData, ImgurResponse, UploadResponse, Uploaded};
pub use uploader::{UploadCallback, Uploader};
