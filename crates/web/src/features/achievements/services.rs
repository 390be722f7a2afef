use sqlx::PgPool;
use storage::{
    dto::achievement::AchievementResponse,
    error::Result,
    models::AchievementRecord,
    repository::achievement::AchievementRepository,
    services::achievements::rank_achievements,
};

pub async fn load_achievements(pool: &PgPool) -> Result<Vec<AchievementRecord>> {
    let repo = AchievementRepository::new(pool);
    repo.list().await
}

pub fn ranked_view(achievements: &[AchievementRecord], limit: usize) -> Vec<AchievementResponse> {
    rank_achievements(achievements, limit)
        .into_iter()
        .map(AchievementResponse::from)
        .collect()
}
