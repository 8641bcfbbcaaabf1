//! Request validation and QR symbol encoding.
//!
//! The error-correction tier is driven by the logo flag: a centered logo
//! occludes part of the symbol, so logo requests use the highest tier (H,
//! ~30% damage tolerance) while plain requests use the lowest (L, ~7%),
//! keeping the module matrix as small as the content allows.

use qrcode::{EcLevel, QrCode};

use crate::error::InsigniaError;

/// Minimum output size in pixels; smaller requests are raised to this.
pub const MIN_SIZE: u32 = 100;

/// Maximum output size in pixels; larger requests are lowered to this.
pub const MAX_SIZE: u32 = 2000;

/// Output size used when the caller passes zero / omits the size.
pub const DEFAULT_SIZE: u32 = 500;

/// A validated QR generation request.
///
/// Constructed fresh per call; the size is defaulted and clamped at
/// construction so the rest of the pipeline never sees an out-of-range
/// value.
#[derive(Debug, Clone)]
pub struct EncodingRequest {
    content: String,
    size: u32,
    use_logo: bool,
}

impl EncodingRequest {
    /// Build a request. `size == 0` means "use the default"; any other
    /// value is clamped into `[MIN_SIZE, MAX_SIZE]`.
    pub fn new(content: impl Into<String>, size: u32, use_logo: bool) -> Self {
        Self {
            content: content.into(),
            size: clamp_size(size),
            use_logo,
        }
    }

    /// The text to encode.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Output edge length in pixels (always in `[MIN_SIZE, MAX_SIZE]`).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether a logo badge should be composited over the code.
    pub fn use_logo(&self) -> bool {
        self.use_logo
    }

    /// Error-correction tier implied by the logo flag.
    pub fn ec_level(&self) -> EcLevel {
        if self.use_logo {
            EcLevel::H
        } else {
            EcLevel::L
        }
    }
}

/// Default and clamp a requested pixel size.
pub fn clamp_size(size: u32) -> u32 {
    if size == 0 {
        DEFAULT_SIZE
    } else {
        size.clamp(MIN_SIZE, MAX_SIZE)
    }
}

/// Encode the request content into a QR symbol.
///
/// The symbol version is auto-fit to the smallest that holds the content at
/// the chosen tier. Empty content and content over the symbology's capacity
/// are fatal — the caller gets an error, never a truncated code.
pub fn encode(request: &EncodingRequest) -> Result<QrCode, InsigniaError> {
    if request.content().is_empty() {
        return Err(InsigniaError::Encoding(
            "content is empty; nothing to encode".to_string(),
        ));
    }

    QrCode::with_error_correction_level(request.content().as_bytes(), request.ec_level())
        .map_err(|e| InsigniaError::Encoding(format!("cannot encode content: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_zero_defaults() {
        assert_eq!(clamp_size(0), DEFAULT_SIZE);
    }

    #[test]
    fn test_size_clamped_low() {
        assert_eq!(clamp_size(50), MIN_SIZE);
        assert_eq!(clamp_size(99), MIN_SIZE);
    }

    #[test]
    fn test_size_clamped_high() {
        assert_eq!(clamp_size(5000), MAX_SIZE);
        assert_eq!(clamp_size(2001), MAX_SIZE);
    }

    #[test]
    fn test_size_in_range_unchanged() {
        assert_eq!(clamp_size(100), 100);
        assert_eq!(clamp_size(500), 500);
        assert_eq!(clamp_size(2000), 2000);
    }

    #[test]
    fn test_ec_level_follows_logo_flag() {
        assert_eq!(EncodingRequest::new("x", 500, true).ec_level(), EcLevel::H);
        assert_eq!(EncodingRequest::new("x", 500, false).ec_level(), EcLevel::L);
    }

    #[test]
    fn test_empty_content_rejected() {
        let request = EncodingRequest::new("", 500, false);
        assert!(matches!(
            encode(&request),
            Err(InsigniaError::Encoding(_))
        ));
    }

    #[test]
    fn test_content_over_capacity_rejected() {
        // Binary capacity at tier L tops out at 2953 bytes (version 40)
        let request = EncodingRequest::new("a".repeat(3000), 500, false);
        assert!(matches!(
            encode(&request),
            Err(InsigniaError::Encoding(_))
        ));
    }

    #[test]
    fn test_logo_tier_has_less_capacity() {
        // 2000 bytes fit at L but not at H (~1273 byte ceiling)
        let content = "a".repeat(2000);
        assert!(encode(&EncodingRequest::new(content.clone(), 500, false)).is_ok());
        assert!(encode(&EncodingRequest::new(content, 500, true)).is_err());
    }

    #[test]
    fn test_version_auto_fits_content() {
        let short = encode(&EncodingRequest::new("hi", 500, false)).unwrap();
        let long = encode(&EncodingRequest::new("a".repeat(200), 500, false)).unwrap();
        assert!(long.width() > short.width());
    }
}
