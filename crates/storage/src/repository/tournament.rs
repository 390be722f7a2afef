use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::TournamentRecord;

const SELECT_TOURNAMENTS: &str = r#"
    SELECT id::text AS id, name, start_date::text AS start_date, end_date::text AS end_date,
           location, division, status, is_next, is_featured
    FROM tournaments
"#;

/// Repository for tournament rows
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tournaments, upcoming status first, flagged-next first, then by start date
    pub async fn list(&self) -> Result<Vec<TournamentRecord>> {
        let query = format!(
            "{} ORDER BY status ASC, is_next DESC NULLS LAST, start_date ASC",
            SELECT_TOURNAMENTS
        );

        let tournaments = sqlx::query_as::<_, TournamentRecord>(&query)
            .fetch_all(self.pool)
            .await?;

        tracing::debug!("Fetched {} tournament rows", tournaments.len());

        Ok(tournaments)
    }

    /// Get a tournament by its id. Ids that are not valid uuids are not found.
    pub async fn find_by_id(&self, id: &str) -> Result<TournamentRecord> {
        let query = format!("{} WHERE id = $1::uuid", SELECT_TOURNAMENTS);

        sqlx::query_as::<_, TournamentRecord>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| StorageError::from(e).invalid_id_as_not_found())?
            .ok_or(StorageError::NotFound)
    }
}
