use std::collections::BTreeSet;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    classification::entities::Prediction,
    common::generate_timestamp,
    recipe::{entities::RecipeEntry, value_objects::NO_KNOWN_FOODS_NOTICE},
};

/// Raw upload as received. Lives only for the duration of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(file_name: Option<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn checksum_sha256(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    Classified { predictions: Vec<Prediction> },
    Failed { error: String },
}

impl ImageOutcome {
    /// Ranked prediction lines, or a single error indicator for a failed image.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            ImageOutcome::Classified { predictions } => predictions
                .iter()
                .enumerate()
                .map(|(index, prediction)| prediction.display_line(index + 1))
                .collect(),
            ImageOutcome::Failed { error } => vec![format!("Could not read image: {}", error)],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ImageOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    /// Position in the uploaded batch, starting at 0.
    pub index: usize,
    pub image: UploadedImage,
    pub checksum_sha256: String,
    pub outcome: ImageOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub images: Vec<ImageResult>,
    pub identified_foods: BTreeSet<String>,
    /// One entry per identified food, in label order.
    pub recipes: Vec<RecipeEntry>,
}

impl BatchResult {
    pub fn new(
        images: Vec<ImageResult>,
        identified_foods: BTreeSet<String>,
        recipes: Vec<RecipeEntry>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            processed_at: now,
            images,
            identified_foods,
            recipes,
        }
    }

    /// Informational notice for a non-empty batch without any known food.
    /// An empty batch has no notice.
    pub fn notice(&self) -> Option<&'static str> {
        if !self.images.is_empty() && self.identified_foods.is_empty() {
            Some(NO_KNOWN_FOODS_NOTICE)
        } else {
            None
        }
    }

    pub fn failed_count(&self) -> usize {
        self.images
            .iter()
            .filter(|result| result.outcome.is_failed())
            .count()
    }
}
