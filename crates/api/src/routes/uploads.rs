//! Route definitions for image upload and serving.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload route, mounted under `/api`.
///
/// ```text
/// POST /upload-image   -> upload_image (multipart field `image`)
/// ```
///
/// The body limit rejects oversized uploads before any field is read.
pub fn upload_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload-image", post(uploads::upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Serving route, mounted at the root.
///
/// ```text
/// GET /uploads/{filename}   -> serve_image
/// ```
pub fn serve_router() -> Router<AppState> {
    Router::new().route("/uploads/{filename}", get(uploads::serve_image))
}
