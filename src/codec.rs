//! In-memory image to wire payload conversion.

use crate::{Error, Result};
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::sync::Arc;

/// Rejects images with no pixels.
pub fn ensure_image(image: &DynamicImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidArgument(format!(
            "image must not be empty (got {}x{})",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

/// PNG-encodes `image` and returns the standard base64 text of the PNG bytes.
pub fn encode_png_base64(image: &DynamicImage) -> Result<String> {
    ensure_image(image)?;

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(base64::engine::general_purpose::STANDARD.encode(&png))
}

/// Runs [`encode_png_base64`] on the runtime's blocking pool.
pub async fn encode_on_blocking_pool(image: Arc<DynamicImage>) -> Result<String> {
    tokio::task::spawn_blocking(move || encode_png_base64(&image))
        .await
        .map_err(|e| Error::Runtime(format!("Image encoding task join error: {}", e)))?
}
