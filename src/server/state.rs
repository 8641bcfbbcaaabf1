//! Server state and configuration.

use image::RgbaImage;
use std::path::PathBuf;

use crate::qr::logo;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Path to the brand logo image (e.g., "assets/logo.png")
    pub logo_path: PathBuf,
}

/// Application state shared across handlers.
///
/// The logo is decoded once at startup and held immutably; handlers only
/// ever read it, so concurrent requests need no synchronization.
pub struct AppState {
    pub config: ServerConfig,
    /// Decoded brand logo, `None` when the asset is absent or unreadable.
    pub logo: Option<RgbaImage>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let logo = logo::load(&config.logo_path);
        if let Some(img) = &logo {
            println!(
                "[state] Logo loaded from {} ({}x{})",
                config.logo_path.display(),
                img.width(),
                img.height()
            );
        }
        Self { config, logo }
    }
}
