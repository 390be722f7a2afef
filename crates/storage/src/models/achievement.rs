use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AchievementRecord {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_featured: Option<bool>,
    /// Tie-break only, lower first. Rows without one sort after every row
    /// that has one.
    pub sort_order: Option<i32>,
}

impl AchievementRecord {
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }
}
