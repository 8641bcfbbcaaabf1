//! QR API handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::InsigniaError,
    qr::{self, EncodingRequest},
};

use super::super::state::AppState;

/// Query parameters for the QR endpoints.
///
/// `size` and `use_logo` arrive as raw strings so that malformed values can
/// be coerced instead of rejected: an unparsable size falls back to the
/// default, and `use_logo` accepts the usual truthy/falsy spellings.
#[derive(Debug, Deserialize)]
pub struct QrQuery {
    pub content: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub use_logo: Option<String>,
}

/// Coerce the raw size parameter. `0` is handed to the pipeline, which
/// turns it into the default size.
fn parse_size(value: Option<&str>) -> u32 {
    value
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Coerce a truthy/falsy flag. Absent means true (branded by default).
fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("0") | Some("false") | Some("no") | Some("off") | Some("") => false,
        _ => true,
    }
}

fn request_from_query(query: &QrQuery) -> EncodingRequest {
    EncodingRequest::new(
        &query.content,
        parse_size(query.size.as_deref()),
        parse_flag(query.use_logo.as_deref()),
    )
}

/// Encoding failures are the caller's fault; everything else is ours.
fn error_status(e: &InsigniaError) -> StatusCode {
    match e {
        InsigniaError::Encoding(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/qr - Generate a QR code, returned as base64 PNG in JSON.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QrQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let request = request_from_query(&query);

    println!(
        "[qr] generate: {} bytes of content, {}px, logo={}",
        query.content.len(),
        request.size(),
        request.use_logo()
    );

    match qr::generate(&request, state.logo.as_ref()) {
        Ok(image) => Ok(Json(serde_json::json!({
            "success": true,
            "size": request.size(),
            "image": image,
        }))),
        Err(e) => Err((
            error_status(&e),
            Json(serde_json::json!({"success": false, "error": e.to_string()})),
        )),
    }
}

/// GET /api/qr/preview - Generate a QR code, returned as raw PNG bytes.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QrQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = request_from_query(&query);

    let png_bytes = qr::generate_png(&request, state.logo.as_ref())
        .map_err(|e| (error_status(&e), e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}
