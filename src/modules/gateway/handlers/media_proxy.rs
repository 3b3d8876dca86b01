//! Cover image proxy
//!
//! Re-serves MangaDex cover art under the gateway's own origin so the
//! browser client is not blocked by the upload host's CORS policy. The only
//! failure mode is a 404: a broken origin must look like a missing asset,
//! never a service error.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::modules::gateway::state::AppState;

/// Covers are immutable per filename, so a day of client-side caching is
/// safe and spares the origin.
const COVER_CACHE_CONTROL: &str = "public, max-age=86400";

pub async fn manga_cover(
    State(state): State<Arc<AppState>>,
    Path((manga_id, file_name)): Path<(String, String)>,
) -> Response {
    let url = format!(
        "{}/covers/{}/{}",
        state.config.mangadex_uploads_url, manga_id, file_name
    );

    let upstream = match state.fetch.get_raw(&url, &state.config.media_retry).await {
        Ok(upstream) => upstream,
        Err(e) => {
            log::error!("Cover proxy error: {}", e);
            return (StatusCode::NOT_FOUND, "Image not found").into_response();
        }
    };

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, COVER_CACHE_CONTROL)
        .body(Body::from_stream(upstream.bytes_stream()))
    {
        Ok(response) => response,
        Err(e) => {
            log::error!("Cover proxy response build error: {}", e);
            (StatusCode::NOT_FOUND, "Image not found").into_response()
        }
    }
}
