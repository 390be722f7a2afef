use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::services::schedule::{
    ClassificationWarning, ClassifiedTournament, Countdown, DEFAULT_RECENT_RESULTS, ScheduleFilter,
};

/// Query parameters for the schedule listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    #[serde(default)]
    #[param(inline)]
    pub filter: ScheduleFilter,

    #[validate(range(min = 1900, max = 2200, message = "year must be between 1900 and 2200"))]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentResultsQuery {
    #[serde(default = "default_recent_limit")]
    #[validate(range(max = 50, message = "limit must be at most 50"))]
    pub limit: usize,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_RESULTS
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    #[validate(range(min = 1900, max = 2200, message = "year must be between 1900 and 2200"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: u32,
}

/// A tournament as shown on the site
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub effective_date: NaiveDate,
    pub location: String,
    pub division: String,
    pub status: String,
    pub is_past: bool,
    pub is_next: bool,
    pub is_featured: bool,
}

impl From<&ClassifiedTournament> for TournamentResponse {
    fn from(t: &ClassifiedTournament) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            start_date: t.start_date,
            end_date: t.end_date,
            effective_date: t.effective_date,
            location: t.location.clone(),
            division: t.division.clone(),
            status: t.status_label().to_string(),
            is_past: t.is_past,
            is_next: t.is_next,
            is_featured: t.is_featured,
        }
    }
}

/// Classified schedule plus anything the classifier had to skip or flag
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub tournaments: Vec<TournamentResponse>,
    pub warnings: Vec<ClassificationWarning>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NextTournamentResponse {
    pub tournament: Option<TournamentResponse>,
    pub countdown: Option<Countdown>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}
