use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::RecipeEntry};

/// Read-only catalog mapping food labels to recipes.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCatalog: Send + Sync {
    /// Case-insensitive lookup. Unknown labels are `None`, never an error.
    fn lookup(&self, label: &str) -> Option<RecipeEntry>;

    /// Every entry, ordered by label.
    fn entries(&self) -> Vec<RecipeEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipe(&self, label: &str) -> Result<RecipeEntry, CoreError>;

    fn get_recipes(&self) -> Vec<RecipeEntry>;
}
