//! Fire-and-forget uploads with callback delivery
//!
//! [`Uploader`] validates its arguments on the calling thread, then runs the
//! whole upload (encode, send, parse) on the tokio runtime it was built in
//! and reports the outcome to an [`UploadCallback`]. Encoding runs on the
//! runtime's blocking pool, which grows with demand and reuses idle threads.

use crate::codec;
use crate::host::{ensure_client_id, ImageHost, ImgurClient};
use crate::models::Uploaded;
use crate::{Error, Result, UploaderConfig};
use image::DynamicImage;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// Receives the outcome of one upload. Both handlers take `self` by value, so
/// exactly one of them runs, once.
///
/// Handlers run on a runtime worker thread and should not block for long.
pub trait UploadCallback: Send + 'static {
    fn on_success(self, headers: HeaderMap, body: serde_json::Value);
    fn on_failure(self, error: Error);
}

impl<F> UploadCallback for F
where
    F: FnOnce(Result<Uploaded>) + Send + 'static,
{
    fn on_success(self, headers: HeaderMap, body: serde_json::Value) {
        self(Ok(Uploaded { headers, body }))
    }

    fn on_failure(self, error: Error) {
        self(Err(error))
    }
}

/// Holds the callback while its task runs. If the task is dropped before
/// delivering (runtime shut down before or during the upload), the failure
/// handler fires from `Drop`.
struct PendingCallback<C: UploadCallback> {
    callback: Option<C>,
}

impl<C: UploadCallback> PendingCallback<C> {
    fn new(callback: C) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    fn deliver(mut self, result: Result<Uploaded>) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        match result {
            Ok(uploaded) => {
                tracing::trace!("Delivering upload result to success handler");
                callback.on_success(uploaded.headers, uploaded.body)
            }
            Err(e) => {
                tracing::trace!("Delivering upload result to failure handler");
                callback.on_failure(e)
            }
        }
    }
}

impl<C: UploadCallback> Drop for PendingCallback<C> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::trace!("Upload task dropped before completion");
            callback.on_failure(Error::Runtime(
                "upload task dropped before completion".to_string(),
            ));
        }
    }
}

pub struct Uploader<H: ImageHost = ImgurClient> {
    host: Arc<H>,
    runtime: Handle,
}

impl<H: ImageHost> Clone for Uploader<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            runtime: self.runtime.clone(),
        }
    }
}

impl Uploader<ImgurClient> {
    /// Uploader for the public Imgur API, bound to the current tokio runtime.
    pub fn new() -> Result<Self> {
        Self::with_host(ImgurClient::new())
    }

    pub fn from_config(config: UploaderConfig) -> Result<Self> {
        Self::with_host(ImgurClient::from_config(config))
    }
}

impl<H: ImageHost> Uploader<H> {
    /// Binds `host` to the runtime the caller is currently running in.
    pub fn with_host(host: H) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| Error::Runtime(format!("No tokio runtime available: {}", e)))?;
        Ok(Self::with_runtime(host, runtime))
    }

    /// Binds `host` to an explicit runtime, so uploads can be submitted from
    /// threads that are not part of any runtime.
    pub fn with_runtime(host: H, runtime: Handle) -> Self {
        Self {
            host: Arc::new(host),
            runtime,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Schedules an upload and returns immediately.
    ///
    /// A blank client ID or an empty image is reported here, on the calling
    /// thread, and nothing is scheduled. Every later failure (encoding,
    /// transport, a body that is not JSON) goes to
    /// [`UploadCallback::on_failure`]. Non-2xx responses with a JSON body are
    /// delivered to [`UploadCallback::on_success`]. If the runtime shuts down
    /// before the upload completes, `on_failure` receives
    /// [`Error::Runtime`].
    pub fn upload<C: UploadCallback>(
        &self,
        client_id: &str,
        image: Arc<DynamicImage>,
        callback: C,
    ) -> Result<()> {
        ensure_client_id(client_id)?;
        codec::ensure_image(&image)?;

        let host = Arc::clone(&self.host);
        let client_id = client_id.to_string();
        let pending = PendingCallback::new(callback);

        self.runtime.spawn(async move {
            let result = run_upload(host.as_ref(), &client_id, image).await;
            pending.deliver(result);
        });

        Ok(())
    }

    /// Like [`Uploader::upload`], but hands the outcome back through a
    /// oneshot channel instead of a callback.
    pub fn submit(
        &self,
        client_id: &str,
        image: Arc<DynamicImage>,
    ) -> Result<oneshot::Receiver<Result<Uploaded>>> {
        let (tx, rx) = oneshot::channel();
        self.upload(client_id, image, move |result: Result<Uploaded>| {
            // Receiver dropped means nobody is waiting for the outcome.
            let _ = tx.send(result);
        })?;
        Ok(rx)
    }
}

async fn run_upload<H: ImageHost>(
    host: &H,
    client_id: &str,
    image: Arc<DynamicImage>,
) -> Result<Uploaded> {
    let payload = codec::encode_on_blocking_pool(image).await?;

    let response = host.upload_payload(client_id, payload).await?;
    let body: serde_json::Value = response.json()?;
    let (_, headers, _) = response.into_parts();

    Ok(Uploaded { headers, body })
}
