//! Handlers for image upload and serving.
//!
//! Uploads land in the configured upload directory under a generated
//! UUID-based filename; serving reads them back by exact filename. The two
//! sides are deliberately not linked to the database: a product's
//! `image_filename` is free text and an uploaded file may go unreferenced.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use stockroom_core::error::CoreError;
use stockroom_core::upload;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a successful upload: the stored filename and the path it
/// can be retrieved from.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub url: String,
}

/// POST /api/upload-image
///
/// Accept a single image file under the multipart field `image`. The file
/// is stored under a generated unique name; the original name only
/// contributes its extension, which must be on the allow-list.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        }
    }

    let (filename, data) = file.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Missing required 'image' field".to_string(),
        ))
    })?;

    if filename.is_empty() {
        return Err(CoreError::Validation("No file selected".to_string()).into());
    }

    let extension = upload::image_extension(&filename)?;
    let stored = upload::stored_image_filename(&extension);

    let dir = std::path::Path::new(&state.config.upload_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(dir.join(&stored), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(filename = %stored, size = data.len(), "Image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: format!("/uploads/{stored}"),
            filename: stored,
        }),
    ))
}

/// GET /uploads/{filename}
///
/// Serve the raw bytes of a previously uploaded file.
pub async fn serve_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    if !upload::is_safe_filename(&filename) {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }

    let path = std::path::Path::new(&state.config.upload_dir).join(&filename);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!(
                "No uploaded file named '{filename}'"
            )));
        }
        Err(e) => return Err(AppError::InternalError(e.to_string())),
    };

    let content_type = content_type_for_extension(&filename);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, data.len().to_string())
        .body(Body::from(data))
        .unwrap())
}

/// Map a filename extension to its image content type.
fn content_type_for_extension(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
