use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::classify_batch::{__path_classify_batch, classify_batch};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(classify_batch))]
pub struct BatchApiDoc;

pub fn batch_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/batches", state.args.server.root_path),
        post(classify_batch),
    )
}
