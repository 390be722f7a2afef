use sqlx::PgPool;

use crate::error::Result;
use crate::models::AchievementRecord;

/// Repository for achievement rows
pub struct AchievementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AchievementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all achievements, featured first, newest year first
    pub async fn list(&self) -> Result<Vec<AchievementRecord>> {
        let achievements = sqlx::query_as::<_, AchievementRecord>(
            r#"
            SELECT id::text AS id, year, title, description, category, is_featured, sort_order
            FROM achievements
            ORDER BY is_featured DESC NULLS LAST, year DESC, sort_order ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(achievements)
    }
}
