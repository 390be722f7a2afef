use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::home::HomeResponse;

use crate::{
    error::WebError,
    state::{AppState, local_now},
};

use super::services;

#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Next tournament, recent results and featured achievements", body = HomeResponse)
    ),
    tag = "home"
)]
pub async fn get_home(State(state): State<AppState>) -> Result<Response, WebError> {
    let home = services::load_home(
        state.db.pool(),
        local_now(),
        state.featured_achievements_limit,
    )
    .await?;

    Ok(Json(home).into_response())
}
