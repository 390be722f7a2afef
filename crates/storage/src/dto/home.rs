use serde::Serialize;
use utoipa::ToSchema;

use super::achievement::AchievementResponse;
use super::tournament::{NextTournamentResponse, TournamentResponse};
use crate::services::schedule::ClassificationWarning;

/// Everything the landing page needs in one response
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub next_tournament: NextTournamentResponse,
    pub recent_results: Vec<TournamentResponse>,
    pub featured_achievements: Vec<AchievementResponse>,
    pub warnings: Vec<ClassificationWarning>,
}
