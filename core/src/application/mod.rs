use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        classification::ports::ImageClassifier,
        common::{RecipeLensConfig, entities::app_errors::CoreError, services::Service},
        recipe::ports::RecipeCatalog,
    },
    infrastructure::{classifier::TractImageClassifier, recipe::StaticRecipeCatalog},
};

pub type RecipeLensService = Service<Arc<dyn ImageClassifier>, StaticRecipeCatalog>;

/// Loads the model and the recipe catalog once and wires them into the service.
pub fn create_service(config: RecipeLensConfig) -> Result<RecipeLensService, CoreError> {
    let classifier: Arc<dyn ImageClassifier> =
        Arc::new(TractImageClassifier::load(&config.classifier)?);

    let recipe_catalog = match &config.catalog.recipes_path {
        Some(path) => StaticRecipeCatalog::from_json_path(path)?,
        None => StaticRecipeCatalog::builtin(),
    };

    info!(recipes = recipe_catalog.len(), "RecipeLens service ready");

    Ok(Service::new(classifier, recipe_catalog))
}
