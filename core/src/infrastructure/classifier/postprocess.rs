use crate::domain::{
    classification::{entities::Prediction, value_objects::OutputKind},
    common::entities::app_errors::CoreError,
};

use super::labels::LabelSet;

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|score| (score - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|value| value / sum).collect()
}

/// Indices of the `k` highest scores, best first. Ties keep the lower index
/// first so the ranking is stable across runs.
pub fn top_k(scores: &[f32], k: usize) -> Vec<(usize, f32)> {
    let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(k);
    ranked
}

/// Maps raw model output to the `k` best labelled predictions.
///
/// The output may carry one extra leading background class (1001 scores
/// for 1000 labels); it is dropped after softmax.
pub fn decode_predictions(
    scores: &[f32],
    labels: &LabelSet,
    output: OutputKind,
    k: usize,
) -> Result<Vec<Prediction>, CoreError> {
    let offset = if scores.len() == labels.len() {
        0
    } else if scores.len() == labels.len() + 1 {
        1
    } else {
        return Err(CoreError::ClassificationUnavailable(format!(
            "model produced {} scores for {} labels",
            scores.len(),
            labels.len()
        )));
    };

    if scores.iter().any(|score| !score.is_finite()) {
        return Err(CoreError::ClassificationUnavailable(
            "model produced non-finite scores".to_string(),
        ));
    }

    let probabilities = match output {
        OutputKind::Logits => softmax(scores),
        OutputKind::Probabilities => scores.iter().map(|p| p.clamp(0.0, 1.0)).collect(),
    };

    top_k(&probabilities[offset..], k)
        .into_iter()
        .map(|(index, confidence)| {
            let class = labels.get(index).ok_or_else(|| {
                CoreError::ClassificationUnavailable(format!("no label for class {}", index))
            })?;
            Ok(Prediction::new(
                class.identifier.clone(),
                class.label.clone(),
                confidence,
            ))
        })
        .collect()
}
