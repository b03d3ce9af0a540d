use std::sync::Arc;

use crate::domain::{
    classification::entities::{ModelInfo, Prediction},
    common::entities::app_errors::CoreError,
};

/// Port over the pretrained image classifier.
///
/// `classify` takes the raw upload bytes. Implementations own decoding and
/// preprocessing and return the top predictions ordered by descending
/// confidence. Content that is not a readable JPEG/PNG fails with
/// [`CoreError::ImageDecode`]; anything else going wrong with the model is
/// [`CoreError::ClassificationUnavailable`].
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, CoreError>;

    fn model_info(&self) -> ModelInfo;
}

impl<T> ImageClassifier for Arc<T>
where
    T: ImageClassifier + ?Sized,
{
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, CoreError> {
        (**self).classify(image)
    }

    fn model_info(&self) -> ModelInfo {
        (**self).model_info()
    }
}
