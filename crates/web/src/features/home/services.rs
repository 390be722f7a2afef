use chrono::NaiveDateTime;
use sqlx::PgPool;
use storage::{
    dto::home::HomeResponse, error::Result, models::AchievementRecord,
    services::schedule::{Classification, DEFAULT_RECENT_RESULTS},
};

use crate::features::{achievements, tournaments};

pub async fn load_home(
    pool: &PgPool,
    now: NaiveDateTime,
    featured_limit: usize,
) -> Result<HomeResponse> {
    let (classification, achievement_rows) = tokio::try_join!(
        tournaments::services::load_schedule(pool, now.date()),
        achievements::services::load_achievements(pool),
    )?;

    Ok(home_view(classification, &achievement_rows, now, featured_limit))
}

pub fn home_view(
    classification: Classification,
    achievement_rows: &[AchievementRecord],
    now: NaiveDateTime,
    featured_limit: usize,
) -> HomeResponse {
    HomeResponse {
        next_tournament: tournaments::services::next_view(&classification, now),
        recent_results: tournaments::services::recent_view(&classification, DEFAULT_RECENT_RESULTS),
        featured_achievements: achievements::services::ranked_view(achievement_rows, featured_limit),
        warnings: classification.warnings,
    }
}
