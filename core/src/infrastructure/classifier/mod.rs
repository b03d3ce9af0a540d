pub mod labels;
pub mod postprocess;
pub mod preprocessing;
pub mod tract_classifier;

pub use labels::{ClassLabel, LabelSet};
pub use tract_classifier::TractImageClassifier;
