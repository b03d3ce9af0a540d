use crate::domain::{classification::ports::ImageClassifier, recipe::ports::RecipeCatalog};

/// Entry point of the core. Every use case is implemented on this type, generic
/// over the classifier and catalog ports so tests can swap either side.
#[derive(Clone)]
pub struct Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    pub(crate) classifier: C,
    pub(crate) recipe_catalog: R,
}

impl<C, R> Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    pub fn new(classifier: C, recipe_catalog: R) -> Self {
        Self {
            classifier,
            recipe_catalog,
        }
    }
}
