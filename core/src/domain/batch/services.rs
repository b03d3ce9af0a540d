use std::collections::BTreeSet;

use tracing::{error, info, instrument, warn};

use crate::domain::{
    batch::{
        entities::{BatchResult, ImageOutcome, ImageResult, UploadedImage},
        ports::BatchService,
    },
    classification::{ports::ImageClassifier, value_objects::TOP_K},
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{entities::RecipeEntry, ports::RecipeCatalog},
};

impl<C, R> BatchService for Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    #[instrument(skip(self, images), fields(batch_size = images.len()))]
    fn process_batch(&self, images: Vec<UploadedImage>) -> Result<BatchResult, CoreError> {
        let mut results = Vec::with_capacity(images.len());
        let mut identified_foods = BTreeSet::new();

        for (index, image) in images.into_iter().enumerate() {
            let checksum_sha256 = image.checksum_sha256();

            let outcome = match self.classifier.classify(&image.data) {
                Ok(mut predictions) => {
                    predictions.truncate(TOP_K);

                    for prediction in &predictions {
                        if let Some(entry) = self.recipe_catalog.lookup(&prediction.label) {
                            identified_foods.insert(entry.label);
                        }
                    }

                    ImageOutcome::Classified { predictions }
                }
                Err(CoreError::ImageDecode(reason)) => {
                    warn!(
                        index,
                        checksum = %checksum_sha256,
                        file_name = image.file_name.as_deref().unwrap_or("unknown"),
                        reason = %reason,
                        "Skipping undecodable image"
                    );
                    ImageOutcome::Failed { error: reason }
                }
                Err(e) => {
                    error!(index, error = %e, "Classifier failed, aborting batch");
                    return Err(match e {
                        CoreError::ClassificationUnavailable(_) => e,
                        other => CoreError::ClassificationUnavailable(other.to_string()),
                    });
                }
            };

            results.push(ImageResult {
                index,
                image,
                checksum_sha256,
                outcome,
            });
        }

        let recipes: Vec<RecipeEntry> = identified_foods
            .iter()
            .filter_map(|label| self.recipe_catalog.lookup(label))
            .collect();

        let result = BatchResult::new(results, identified_foods, recipes);

        info!(
            batch_id = %result.id,
            images = result.images.len(),
            failed = result.failed_count(),
            identified = result.identified_foods.len(),
            "Batch processed"
        );

        Ok(result)
    }
}
