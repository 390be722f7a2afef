use sqlx::PgPool;
use storage::{
    dto::player::{PlayerResponse, RosterQuery},
    error::Result,
    models::PlayerRecord,
    repository::player::PlayerRepository,
    services::roster::{active_roster, filter_roster},
};

pub async fn load_players(pool: &PgPool) -> Result<Vec<PlayerRecord>> {
    let repo = PlayerRepository::new(pool);
    repo.list().await
}

pub fn roster_view(players: &[PlayerRecord], query: &RosterQuery) -> Vec<PlayerResponse> {
    let roster = active_roster(players);

    filter_roster(&roster, query.search.as_deref().unwrap_or_default(), query.role)
        .into_iter()
        .map(PlayerResponse::from)
        .collect()
}
