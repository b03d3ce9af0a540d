use utoipa::OpenApi;

use crate::application::http::{
    batch::router::BatchApiDoc, health::router::HealthApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeLens API",
        description = "Classify food photos and look up matching recipes"
    ),
    nest(
        (path = "/api/batches", api = BatchApiDoc),
        (path = "/api/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
