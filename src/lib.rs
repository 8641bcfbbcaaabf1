//! # Insignia - Branded QR Code Generator
//!
//! Insignia generates QR codes with an optional centered brand logo. It
//! provides:
//!
//! - **Encoding**: symbol generation via the `qrcode` crate, with the
//!   error-correction tier chosen to survive logo occlusion
//! - **Rendering**: fixed-density rasterization resampled to the requested
//!   size with a Lanczos filter
//! - **Branding**: white-padded logo badge composited over the code center
//! - **Transport**: PNG serialization, base64-encoded for embedding
//!
//! ## Quick Start
//!
//! ```no_run
//! use insignia::qr::{self, EncodingRequest};
//!
//! // A plain 300px code (low error correction, no logo)
//! let request = EncodingRequest::new("https://example.com", 300, false);
//! let base64_png = qr::generate(&request, None)?;
//!
//! // A branded code: load the logo, tier H absorbs the occlusion
//! let logo = qr::logo::load("assets/logo.png".as_ref());
//! let request = EncodingRequest::new("https://example.com", 500, true);
//! let base64_png = qr::generate(&request, logo.as_ref())?;
//!
//! # Ok::<(), insignia::InsigniaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`qr`] | Encoding, rendering, and logo compositing pipeline |
//! | [`server`] | HTTP endpoints exposing the pipeline |
//! | [`error`] | Error types |

pub mod error;
pub mod qr;
pub mod server;

// Re-exports for convenience
pub use error::InsigniaError;
pub use qr::EncodingRequest;
