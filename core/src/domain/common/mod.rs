use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::classification::value_objects::{Normalization, OutputKind, TensorLayout};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeLensConfig {
    pub classifier: ClassifierConfig,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub normalization: Normalization,
    pub layout: TensorLayout,
    pub output: OutputKind,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in recipes. `None` keeps the built-in catalog.
    pub recipes_path: Option<PathBuf>,
}

/// Current time along with the matching UUID v7 timestamp.
pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
