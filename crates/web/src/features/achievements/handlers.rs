use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::achievement::{AchievementQuery, AchievementResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/achievements",
    params(AchievementQuery),
    responses(
        (status = 200, description = "Achievements, featured first then newest", body = Vec<AchievementResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "achievements"
)]
pub async fn list_achievements(
    State(db): State<Database>,
    Query(query): Query<AchievementQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let achievements = services::load_achievements(db.pool()).await?;

    Ok(Json(services::ranked_view(&achievements, query.limit)).into_response())
}
