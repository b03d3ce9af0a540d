use std::{collections::BTreeMap, fs, path::Path};

use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::RecipeEntry, ports::RecipeCatalog, value_objects::normalize_label},
};

use super::builtin::BUILTIN_RECIPES;

/// In-memory catalog, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRecipeCatalog {
    recipes: BTreeMap<String, String>,
}

impl StaticRecipeCatalog {
    pub fn builtin() -> Self {
        Self {
            recipes: BUILTIN_RECIPES
                .iter()
                .map(|(label, recipe)| (label.to_string(), recipe.to_string()))
                .collect(),
        }
    }

    /// Builds a catalog from arbitrary pairs. Labels are normalized; empty
    /// labels and empty catalogs are rejected.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut recipes = BTreeMap::new();

        for (label, recipe) in entries {
            let label = normalize_label(label.as_ref());
            if label.is_empty() {
                return Err(CoreError::InvalidCatalog(
                    "recipe label cannot be empty".to_string(),
                ));
            }
            recipes.insert(label, recipe.into());
        }

        if recipes.is_empty() {
            return Err(CoreError::InvalidCatalog(
                "catalog has no recipes".to_string(),
            ));
        }

        Ok(Self { recipes })
    }

    /// Loads a JSON object of `{ "label": "recipe text" }` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidCatalog(format!("invalid recipe JSON: {}", e)))?;

        Self::from_entries(entries)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, CoreError> {
        let json = fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            recipes = catalog.len(),
            "Loaded recipe catalog"
        );

        Ok(catalog)
    }
}

impl RecipeCatalog for StaticRecipeCatalog {
    fn lookup(&self, label: &str) -> Option<RecipeEntry> {
        let key = normalize_label(label);
        self.recipes
            .get(&key)
            .map(|recipe| RecipeEntry::new(key, recipe.clone()))
    }

    fn entries(&self) -> Vec<RecipeEntry> {
        self.recipes
            .iter()
            .map(|(label, recipe)| RecipeEntry::new(label.clone(), recipe.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.recipes.len()
    }
}
