use axum::extract::{Multipart, State};
use chrono::{DateTime, Utc};
use recipelens_core::domain::batch::entities::{BatchResult, ImageOutcome, ImageResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    batch::uploads::{read_uploads, run_batch},
    recipe::handlers::get_recipe::RecipeCardResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Multipart form accepted by the batch endpoint.
#[derive(Debug, Clone, ToSchema)]
pub struct BatchUploadForm {
    /// JPEG or PNG files, classified in order. A single file may also be sent as `image`.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImageResultResponse {
    pub index: usize,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: usize,
    pub checksum_sha256: String,
    pub outcome: ImageOutcome,
    /// Ranked prediction lines, or a single error line for unreadable images.
    pub display: Vec<String>,
}

impl From<ImageResult> for ImageResultResponse {
    fn from(result: ImageResult) -> Self {
        Self {
            index: result.index,
            display: result.outcome.display_lines(),
            size_bytes: result.image.data.len(),
            file_name: result.image.file_name,
            content_type: result.image.content_type,
            checksum_sha256: result.checksum_sha256,
            outcome: result.outcome,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BatchResponse {
    pub id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub images: Vec<ImageResultResponse>,
    pub identified_foods: Vec<String>,
    pub recipes: Vec<RecipeCardResponse>,
    pub notice: Option<String>,
}

impl From<BatchResult> for BatchResponse {
    fn from(result: BatchResult) -> Self {
        let notice = result.notice().map(str::to_string);

        Self {
            id: result.id,
            processed_at: result.processed_at,
            images: result.images.into_iter().map(Into::into).collect(),
            identified_foods: result.identified_foods.into_iter().collect(),
            recipes: result.recipes.into_iter().map(Into::into).collect(),
            notice,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "batch",
    summary = "Classify a batch of food photos",
    description = "Classifies every uploaded JPEG or PNG (multipart fields `images` or `image`) and returns the top predictions per image plus the recipes of every identified food.",
    request_body(content = BatchUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = BatchResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse, description = "Classifier unavailable")
    ),
)]
pub async fn classify_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<BatchResponse>, ApiError> {
    let uploads = read_uploads(&mut multipart).await?;
    let result = run_batch(&state, uploads).await?;

    Ok(Response::OK(BatchResponse::from(result)))
}
