use axum::{Router, routing::get};

use super::handlers::{
    get_calendar, get_next_tournament, get_recent_results, get_tournament, get_years,
    list_tournaments,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tournaments))
        .route("/next", get(get_next_tournament))
        .route("/recent", get(get_recent_results))
        .route("/years", get(get_years))
        .route("/calendar", get(get_calendar))
        .route("/:id", get(get_tournament))
}
