//! Static front-end delivery.
//!
//! Anything outside `/api` is answered from the configured directory,
//! with `/` mapping to `index.html`. Only the three front-end types get
//! real content types; everything else is plain text, and a missing file
//! is a plain-text 404.

use std::path::Path;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        _ => "text/plain; charset=utf-8",
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

/// Serves `uri_path` from `static_dir`.
///
/// Rejects any path that steps outside the directory.
pub(crate) async fn serve(static_dir: &Path, uri_path: &str) -> Response {
    let rel = uri_path.trim_start_matches('/');
    let rel = if rel.is_empty() { "index.html" } else { rel };

    if rel
        .split('/')
        .any(|seg| seg.is_empty() || seg == "." || seg == ".." || seg.contains('\\'))
    {
        return not_found();
    }

    match tokio::fs::read(static_dir.join(rel)).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, content_type_for(rel))],
            bytes,
        )
            .into_response(),
        Err(_) => not_found(),
    }
}
