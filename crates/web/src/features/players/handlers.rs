use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{PlayerResponse, RosterQuery},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    params(RosterQuery),
    responses(
        (status = 200, description = "Active roster, captains then coaches then players", body = Vec<PlayerResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "players"
)]
pub async fn list_players(
    State(db): State<Database>,
    Query(query): Query<RosterQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let players = services::load_players(db.pool()).await?;

    Ok(Json(services::roster_view(&players, &query)).into_response())
}
