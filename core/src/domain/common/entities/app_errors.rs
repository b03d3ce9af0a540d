use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Image could not be decoded: {0}")]
    ImageDecode(String),

    #[error("Classification unavailable: {0}")]
    ClassificationUnavailable(String),

    #[error("Model could not be loaded: {0}")]
    ModelLoad(String),

    #[error("Invalid recipe catalog: {0}")]
    InvalidCatalog(String),

    #[error("Not found")]
    NotFound,
}
