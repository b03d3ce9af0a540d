use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::value_objects::{
    Normalization, OutputKind, TensorLayout, display_label, format_confidence,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    /// Class identifier from the label set, e.g. the ImageNet synset `n07873807`.
    pub identifier: String,
    pub label: String,
    /// Probability in `[0, 1]`.
    pub confidence: f32,
}

impl Prediction {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>, confidence: f32) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            confidence,
        }
    }

    /// `"{rank}. {Label} ({confidence}%)"`, rank starting at 1.
    pub fn display_line(&self, rank: usize) -> String {
        format!(
            "{}. {} ({}%)",
            rank,
            display_label(&self.label),
            format_confidence(self.confidence)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    pub model_path: String,
    pub num_classes: usize,
    pub input_width: u32,
    pub input_height: u32,
    pub normalization: Normalization,
    pub layout: TensorLayout,
    pub output: OutputKind,
}
