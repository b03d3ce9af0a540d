use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use tracing::warn;

use crate::application::http::{
    batch::uploads::{read_uploads, run_batch},
    page::view::PageView,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Classifies the submitted form and renders the results page.
///
/// Failures of the whole batch are rendered as a notice on the page with the
/// matching status code instead of a JSON error body.
pub async fn submit_page(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let root_path = state.args.server.root_path.as_str();

    let outcome = match read_uploads(&mut multipart).await {
        Ok(uploads) => run_batch(&state, uploads).await,
        Err(error) => Err(error),
    };

    let (status, view) = match outcome {
        Ok(result) => (StatusCode::OK, PageView::from_batch(root_path, &result)),
        Err(error) => {
            warn!(status = %error.status(), "Upload page request failed: {}", error);
            (error.status(), PageView::with_notice(root_path, error.to_string()))
        }
    };

    let html = state
        .pages
        .render(&view)
        .map_err(|e| ApiError::InternalServerError(format!("Failed to render page: {}", e)))?;

    Ok((status, Html(html)))
}
