use axum::extract::{Path, State};
use recipelens_core::domain::recipe::{entities::RecipeEntry, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

/// A recipe as shown on a card, `display` being `"{Title}: {recipe}"`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RecipeCardResponse {
    pub label: String,
    pub title: String,
    pub recipe: String,
    pub display: String,
}

impl From<RecipeEntry> for RecipeCardResponse {
    fn from(entry: RecipeEntry) -> Self {
        Self {
            title: entry.title(),
            display: entry.card(),
            label: entry.label,
            recipe: entry.recipe,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{label}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Looks up the recipe of one food label, case-insensitively.",
    params(
        ("label" = String, Path, description = "Food label, e.g. `pizza`"),
    ),
    responses(
        (status = 200, body = RecipeCardResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_recipe(
    Path(label): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<RecipeCardResponse>, ApiError> {
    let entry = state.service.get_recipe(&label).map_err(ApiError::from)?;

    Ok(Response::OK(RecipeCardResponse::from(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_from_entry() {
        let card = RecipeCardResponse::from(RecipeEntry::new("ice cream", "- Milk\n- Sugar"));

        assert_eq!(card.label, "ice cream");
        assert_eq!(card.title, "Ice cream");
        assert_eq!(card.display, "Ice cream: - Milk\n- Sugar");
    }
}
