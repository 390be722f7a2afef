use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::AchievementRecord;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AchievementQuery {
    #[serde(default = "default_limit")]
    #[validate(range(max = 100, message = "limit must be at most 100"))]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementResponse {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
}

impl From<&AchievementRecord> for AchievementResponse {
    fn from(a: &AchievementRecord) -> Self {
        Self {
            id: a.id.clone(),
            year: a.year,
            title: a.title.clone(),
            description: a.description.clone(),
            category: a.category.clone(),
            is_featured: a.featured(),
        }
    }
}
