//! # HTTP Server for QR Code Generation
//!
//! Exposes the QR pipeline over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! insignia serve --listen 0.0.0.0:8080 --logo assets/logo.png
//! ```
//!
//! ## Endpoints
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/qr` | JSON response with base64-encoded PNG |
//! | `GET /api/qr/preview` | Raw PNG bytes (`image/png`) |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::error::InsigniaError;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use insignia::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), insignia::InsigniaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     logo_path: "assets/logo.png".into(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), InsigniaError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        // QR API
        .route("/api/qr", get(handlers::qr::generate))
        .route("/api/qr/preview", get(handlers::qr::preview))
        .with_state(app_state);

    println!("Insignia HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!("Logo asset: {}", config.logo_path.display());
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            InsigniaError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| InsigniaError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
