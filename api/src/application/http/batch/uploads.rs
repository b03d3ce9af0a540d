use axum::extract::Multipart;
use recipelens_core::domain::batch::{
    entities::{BatchResult, UploadedImage},
    ports::BatchService,
};
use tracing::debug;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Multipart field names accepted as image uploads.
pub const IMAGE_FIELDS: [&str; 2] = ["images", "image"];

/// Collects every image part of the form, in submission order.
///
/// A part with neither a file name nor a body is skipped: a browser sends one
/// when the file input is left empty. A named empty file is kept and fails
/// decoding like any other unreadable upload. Fields with other names are
/// ignored.
pub async fn read_uploads(multipart: &mut Multipart) -> Result<Vec<UploadedImage>, ApiError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if !IMAGE_FIELDS.contains(&name.as_str()) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() && file_name.is_none() {
            debug!(field = %name, "Skipping empty file input");
            continue;
        }

        uploads.push(UploadedImage::new(file_name, content_type, data));
    }

    Ok(uploads)
}

/// Runs the batch on the blocking pool so inference does not stall the runtime.
pub async fn run_batch(
    state: &AppState,
    uploads: Vec<UploadedImage>,
) -> Result<BatchResult, ApiError> {
    let service = state.service.clone();

    tokio::task::spawn_blocking(move || service.process_batch(uploads))
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Batch worker failed: {}", e)))?
        .map_err(ApiError::from)
}
