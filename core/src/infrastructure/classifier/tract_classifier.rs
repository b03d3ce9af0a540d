use std::path::Path;

use tracing::{debug, info, instrument};
use tract_onnx::prelude::*;

use crate::domain::{
    classification::{
        entities::{ModelInfo, Prediction},
        ports::ImageClassifier,
        value_objects::{INPUT_SIZE, OutputKind, TOP_K},
    },
    common::{ClassifierConfig, entities::app_errors::CoreError},
};

use super::{
    labels::LabelSet,
    postprocess::decode_predictions,
    preprocessing::{ModelInput, decode_image, image_to_array},
};

type TractPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX image classifier running on tract.
///
/// The model is parsed, optimized and turned into a runnable plan once in
/// [`TractImageClassifier::load`]; `classify` only reads from it.
pub struct TractImageClassifier {
    model: TractPlan,
    labels: LabelSet,
    input: ModelInput,
    output: OutputKind,
    model_path: String,
}

impl TractImageClassifier {
    #[instrument(skip(config), fields(model_path = %config.model_path.display()))]
    pub fn load(config: &ClassifierConfig) -> Result<Self, CoreError> {
        let labels = LabelSet::from_path(&config.labels_path)?;
        if labels.len() < TOP_K {
            return Err(CoreError::ModelLoad(format!(
                "{}: {} classes, at least {} required",
                config.labels_path.display(),
                labels.len(),
                TOP_K
            )));
        }

        let input = ModelInput {
            width: INPUT_SIZE,
            height: INPUT_SIZE,
            normalization: config.normalization,
            layout: config.layout,
        };

        let model = load_plan(&config.model_path, &input).map_err(|e| {
            CoreError::ModelLoad(format!("{}: {}", config.model_path.display(), e))
        })?;

        info!(
            classes = labels.len(),
            normalization = %input.normalization,
            layout = %input.layout,
            output = %config.output,
            "Image classifier loaded"
        );

        Ok(Self {
            model,
            labels,
            input,
            output: config.output,
            model_path: config.model_path.display().to_string(),
        })
    }

    fn run(&self, tensor: Tensor) -> Result<Vec<f32>, CoreError> {
        let outputs = self
            .model
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| CoreError::ClassificationUnavailable(format!("inference failed: {}", e)))?;

        let output = outputs.first().ok_or_else(|| {
            CoreError::ClassificationUnavailable("model produced no output".to_string())
        })?;

        let scores = output.to_array_view::<f32>().map_err(|e| {
            CoreError::ClassificationUnavailable(format!("unexpected output tensor: {}", e))
        })?;

        Ok(scores.iter().copied().collect())
    }
}

fn load_plan(path: &Path, input: &ModelInput) -> TractResult<TractPlan> {
    tract_onnx::onnx()
        .model_for_path(path)?
        .with_input_fact(0, f32::fact(input.shape()).into())?
        .into_optimized()?
        .into_runnable()
}

impl ImageClassifier for TractImageClassifier {
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, CoreError> {
        let decoded = decode_image(image)?;
        debug!(
            width = decoded.width(),
            height = decoded.height(),
            "Decoded upload"
        );

        let tensor = image_to_array(&decoded, &self.input).into_tensor();
        let scores = self.run(tensor)?;

        decode_predictions(&scores, &self.labels, self.output, TOP_K)
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_path: self.model_path.clone(),
            num_classes: self.labels.len(),
            input_width: self.input.width,
            input_height: self.input.height,
            normalization: self.input.normalization,
            layout: self.input.layout,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::classification::value_objects::{Normalization, TensorLayout};

    fn config(model_path: &str, labels_path: &str) -> ClassifierConfig {
        ClassifierConfig {
            model_path: PathBuf::from(model_path),
            labels_path: PathBuf::from(labels_path),
            normalization: Normalization::ImageNet,
            layout: TensorLayout::Nchw,
            output: OutputKind::Logits,
        }
    }

    #[test]
    fn test_load_missing_labels_fails() {
        let result = TractImageClassifier::load(&config(
            "/nonexistent/model.onnx",
            "/nonexistent/synset.txt",
        ));
        assert!(matches!(result, Err(CoreError::ModelLoad(_))));
    }

    #[test]
    fn test_load_rejects_too_few_labels() {
        let labels_path = std::env::temp_dir().join("recipelens-test-two-labels.txt");
        std::fs::write(&labels_path, "n07873807 pizza\nn07697537 hotdog\n").unwrap();

        let result = TractImageClassifier::load(&config(
            "/nonexistent/model.onnx",
            labels_path.to_str().unwrap(),
        ));

        assert!(
            matches!(result, Err(CoreError::ModelLoad(message)) if message.contains("at least 3"))
        );
    }

    #[test]
    fn test_load_missing_model_fails() {
        let labels_path = std::env::temp_dir().join("recipelens-test-synset.txt");
        std::fs::write(
            &labels_path,
            "n07873807 pizza, pizza pie\nn07697537 hotdog\nn07615774 ice cream\n",
        )
        .unwrap();

        let result = TractImageClassifier::load(&config(
            "/nonexistent/model.onnx",
            labels_path.to_str().unwrap(),
        ));

        assert!(matches!(result, Err(CoreError::ModelLoad(message)) if message.contains("model.onnx")));
    }

    /// Runs the real model end to end. Needs `MODEL_PATH` and `LABELS_PATH`
    /// pointing at an ImageNet classifier, e.g. MobileNetV2 and its synset file.
    #[test]
    #[ignore]
    fn test_classify_with_real_model() {
        use std::io::Cursor;

        use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};

        let (Ok(model_path), Ok(labels_path)) =
            (std::env::var("MODEL_PATH"), std::env::var("LABELS_PATH"))
        else {
            return;
        };

        let classifier = TractImageClassifier::load(&config(&model_path, &labels_path)).unwrap();

        let image = DynamicImage::ImageRgb8(ImageBuffer::from_fn(64, 48, |x, y| {
            Rgb([(x * 4) as u8, (y * 5) as u8, 128])
        }));
        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png).unwrap();
        let png = png.into_inner();

        let predictions = classifier.classify(&png).unwrap();

        assert_eq!(predictions.len(), TOP_K);
        assert!(
            predictions
                .windows(2)
                .all(|pair| pair[0].confidence >= pair[1].confidence)
        );
        assert!(
            predictions
                .iter()
                .all(|p| (0.0..=1.0).contains(&p.confidence))
        );
        assert_eq!(classifier.classify(&png).unwrap(), predictions);
        assert!(classifier.model_info().num_classes >= TOP_K);
    }
}
