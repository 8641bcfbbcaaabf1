//! # QR Generation Pipeline
//!
//! Turns text content into a branded QR code image. The flow is strictly
//! linear: validate size → encode → rasterize → (optionally) composite
//! logo → serialize to PNG → base64.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encode`] | Request validation and symbol encoding |
//! | [`render`] | Module-matrix rasterization and resampling |
//! | [`logo`] | Logo loading and badge compositing |
//!
//! ## Quick Start
//!
//! ```no_run
//! use insignia::qr::{self, EncodingRequest};
//!
//! let request = EncodingRequest::new("https://example.com", 500, false);
//! let base64_png = qr::generate(&request, None)?;
//! # Ok::<(), insignia::InsigniaError>(())
//! ```

pub mod encode;
pub mod logo;
pub mod render;

pub use encode::{DEFAULT_SIZE, EncodingRequest, MAX_SIZE, MIN_SIZE};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::InsigniaError;

/// Generate a PNG-encoded QR code for the request.
///
/// When the request asks for a logo and `logo` is `Some`, the logo is
/// composited as a white-padded badge over the center of the code. A `None`
/// logo is not an error: the plain code is returned (graceful degradation
/// for a missing brand asset).
pub fn generate_png(
    request: &EncodingRequest,
    logo: Option<&RgbaImage>,
) -> Result<Vec<u8>, InsigniaError> {
    let code = encode::encode(request)?;

    let native = render::rasterize(&code);
    let mut canvas = render::resample(&native, request.size());

    if request.use_logo()
        && let Some(logo) = logo
    {
        let badge = logo::badge(logo, request.size());
        logo::composite(&mut canvas, &badge);
    }

    // Flatten to opaque RGB before serializing
    let flattened = DynamicImage::ImageRgba8(canvas).to_rgb8();

    let mut png_bytes = Vec::new();
    flattened
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| InsigniaError::Image(format!("PNG encoding failed: {}", e)))?;

    Ok(png_bytes)
}

/// Generate a QR code and return it as base64 text of a PNG image,
/// suitable for embedding in an `<img>` tag or JSON field.
pub fn generate(
    request: &EncodingRequest,
    logo: Option<&RgbaImage>,
) -> Result<String, InsigniaError> {
    Ok(BASE64.encode(generate_png(request, logo)?))
}

/// Convenience wrapper that loads the logo asset from disk on each call.
///
/// The server caches the decoded logo instead (see `server::AppState`);
/// this path-based entry point exists for one-off library and CLI use.
pub fn generate_from_path(
    content: &str,
    size: u32,
    use_logo: bool,
    logo_path: &Path,
) -> Result<String, InsigniaError> {
    let request = EncodingRequest::new(content, size, use_logo);
    let logo = if use_logo { logo::load(logo_path) } else { None };
    generate(&request, logo.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    fn decode_png(png: &[u8]) -> image::DynamicImage {
        image::load_from_memory(png).expect("output is not a decodable PNG")
    }

    #[test]
    fn test_output_is_square_png_of_requested_size() {
        let request = EncodingRequest::new("https://example.com", 300, false);
        let png = generate_png(&request, None).unwrap();
        let img = decode_png(&png);
        assert_eq!(img.width(), 300);
        assert_eq!(img.height(), 300);
    }

    #[test]
    fn test_output_is_square_regardless_of_logo() {
        let logo = RgbaImage::from_pixel(64, 64, Rgba([200, 30, 40, 255]));
        let request = EncodingRequest::new("https://example.com", 400, true);
        let png = generate_png(&request, Some(&logo)).unwrap();
        let img = decode_png(&png);
        assert_eq!((img.width(), img.height()), (400, 400));
    }

    #[test]
    fn test_base64_output_decodes_to_png() {
        let request = EncodingRequest::new("hello", 200, false);
        let encoded = generate(&request, None).unwrap();
        let png = BASE64.decode(encoded).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_missing_logo_asset_degrades_gracefully() {
        let result = generate_from_path(
            "https://example.com",
            500,
            true,
            Path::new("/nonexistent/logo.png"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_content_is_fatal() {
        let request = EncodingRequest::new("", 500, true);
        assert!(matches!(
            generate_png(&request, None),
            Err(InsigniaError::Encoding(_))
        ));
    }

    #[test]
    fn test_logo_flag_without_asset_still_renders() {
        let with_logo_flag = generate(&EncodingRequest::new("abc", 500, true), None).unwrap();
        let img = decode_png(&BASE64.decode(with_logo_flag).unwrap());
        assert_eq!((img.width(), img.height()), (500, 500));
    }
}
