use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_recipes, get_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!("{}/api/recipes/{{label}}", state.args.server.root_path),
            get(get_recipe),
        )
}
