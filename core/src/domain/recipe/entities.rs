use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::value_objects::display_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeEntry {
    /// Lowercase food label, the catalog key.
    pub label: String,
    /// Ingredient lines and a cooking instruction, newline separated.
    pub recipe: String,
}

impl RecipeEntry {
    pub fn new(label: impl Into<String>, recipe: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            recipe: recipe.into(),
        }
    }

    pub fn title(&self) -> String {
        display_label(&self.label)
    }

    /// `"{Label}: {recipe text}"`
    pub fn card(&self) -> String {
        format!("{}: {}", self.title(), self.recipe)
    }
}
