use crate::domain::{
    batch::entities::{BatchResult, UploadedImage},
    common::entities::app_errors::CoreError,
};

/// Service trait for classifying a batch of uploads
#[cfg_attr(test, mockall::automock)]
pub trait BatchService: Send + Sync {
    /// Classifies every image independently, in input order.
    ///
    /// A decode failure is attached to the image it belongs to. Only a
    /// classifier outage fails the whole batch.
    fn process_batch(&self, images: Vec<UploadedImage>) -> Result<BatchResult, CoreError>;
}
