use crate::config::{HTTP_TIMEOUT, USER_AGENT};
use crate::error::{AppError, Result};
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};

/// Decoded RGBA8 pixels, ready to cross back to the UI thread.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Builds the HTTP client shared by all image fetches.
pub fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Fetches and decodes an image. Blocking; call from a worker thread.
pub fn fetch_image(client: &reqwest::blocking::Client, url: &str) -> Result<DecodedImage> {
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    decode_image(&bytes)
}

/// Decodes encoded image bytes, guessing the format from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(AppError::ImageDecode("empty response body".to_string()));
    }

    let image = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();

    Ok(DecodedImage {
        data: image.into_raw(),
        width,
        height,
    })
}

/// Convert RGBA8 pixel data to a Slint Image
pub fn create_slint_image(decoded: DecodedImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &decoded.data,
        decoded.width,
        decoded.height,
    );
    Image::from_rgba8(buffer)
}
