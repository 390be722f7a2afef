use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{
        CalendarQuery, NextTournamentResponse, RecentResultsQuery, ScheduleQuery, ScheduleResponse,
        TournamentResponse, YearsResponse,
    },
    services::schedule::{MonthCalendar, available_years},
};
use validator::Validate;

use crate::{error::WebError, state::local_now};

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    params(ScheduleQuery),
    responses(
        (status = 200, description = "Classified schedule, ascending by start date", body = ScheduleResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(db): State<Database>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let classification = services::load_schedule(db.pool(), local_now().date()).await?;

    Ok(Json(services::schedule_view(classification, &query)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/next",
    responses(
        (status = 200, description = "Next tournament with countdown, or null when nothing is scheduled", body = NextTournamentResponse)
    ),
    tag = "tournaments"
)]
pub async fn get_next_tournament(State(db): State<Database>) -> Result<Response, WebError> {
    let now = local_now();
    let classification = services::load_schedule(db.pool(), now.date()).await?;

    Ok(Json(services::next_view(&classification, now)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/recent",
    params(RecentResultsQuery),
    responses(
        (status = 200, description = "Most recent past tournaments first", body = Vec<TournamentResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "tournaments"
)]
pub async fn get_recent_results(
    State(db): State<Database>,
    Query(query): Query<RecentResultsQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let classification = services::load_schedule(db.pool(), local_now().date()).await?;

    Ok(Json(services::recent_view(&classification, query.limit)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/years",
    responses(
        (status = 200, description = "Years that have tournaments, newest first", body = YearsResponse)
    ),
    tag = "tournaments"
)]
pub async fn get_years(State(db): State<Database>) -> Result<Response, WebError> {
    let classification = services::load_schedule(db.pool(), local_now().date()).await?;

    let years = available_years(&classification.tournaments);

    Ok(Json(YearsResponse { years }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Month grid with the tournaments starting on each day", body = MonthCalendar),
        (status = 400, description = "Invalid year or month")
    ),
    tag = "tournaments"
)]
pub async fn get_calendar(
    State(db): State<Database>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let classification = services::load_schedule(db.pool(), local_now().date()).await?;

    let calendar = services::calendar_view(&classification, query.year, query.month)
        .ok_or_else(|| WebError::BadRequest(format!("Invalid month {}-{}", query.year, query.month)))?;

    Ok(Json(calendar).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    params(
        ("id" = String, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Tournament found", body = TournamentResponse),
        (status = 404, description = "Tournament not found or its dates are unreadable")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let tournament = services::load_tournament(db.pool(), &id, local_now().date())
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(TournamentResponse::from(&tournament)).into_response())
}
