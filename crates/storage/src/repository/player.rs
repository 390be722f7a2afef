use sqlx::PgPool;

use crate::error::Result;
use crate::models::PlayerRecord;

/// Repository for player rows
pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List players from the public view (active only), by role then jersey number
    pub async fn list(&self) -> Result<Vec<PlayerRecord>> {
        let players = sqlx::query_as::<_, PlayerRecord>(
            r#"
            SELECT id::text AS id, full_name, jersey_number, role_tag, position, tagline,
                   bio, photo_url, status, instagram_url, ultiscore_url
            FROM players_public
            ORDER BY role_sort ASC, jersey_number ASC NULLS LAST
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }
}
