use axum::{extract::State, response::Html};

use crate::application::http::{
    page::view::PageView,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

pub async fn get_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .pages
        .render(&PageView::empty(&state.args.server.root_path))
        .map_err(|e| ApiError::InternalServerError(format!("Failed to render page: {}", e)))?;

    Ok(Html(html))
}
