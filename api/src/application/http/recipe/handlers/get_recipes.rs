use axum::extract::State;
use recipelens_core::domain::recipe::ports::RecipeService;

use super::get_recipe::RecipeCardResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Every recipe of the catalog, ordered by food label.",
    responses(
        (status = 200, body = Vec<RecipeCardResponse>)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
) -> Result<Response<Vec<RecipeCardResponse>>, ApiError> {
    let recipes = state
        .service
        .get_recipes()
        .into_iter()
        .map(RecipeCardResponse::from)
        .collect();

    Ok(Response::OK(recipes))
}
