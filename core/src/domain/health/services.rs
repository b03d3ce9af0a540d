use crate::domain::{
    classification::ports::ImageClassifier,
    common::services::Service,
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    recipe::ports::RecipeCatalog,
};

impl<C, R> HealthCheckService for Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    fn readiness(&self) -> ReadinessStatus {
        ReadinessStatus {
            model: self.classifier.model_info(),
            recipe_count: self.recipe_catalog.len(),
        }
    }
}
