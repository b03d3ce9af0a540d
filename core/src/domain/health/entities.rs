use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::entities::ModelInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub model: ModelInfo,
    pub recipe_count: usize,
}
