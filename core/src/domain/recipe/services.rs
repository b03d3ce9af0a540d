use tracing::instrument;

use crate::domain::{
    classification::ports::ImageClassifier,
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::RecipeEntry,
        ports::{RecipeCatalog, RecipeService},
    },
};

impl<C, R> RecipeService for Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    #[instrument(skip(self))]
    fn get_recipe(&self, label: &str) -> Result<RecipeEntry, CoreError> {
        self.recipe_catalog.lookup(label).ok_or(CoreError::NotFound)
    }

    fn get_recipes(&self) -> Vec<RecipeEntry> {
        self.recipe_catalog.entries()
    }
}
