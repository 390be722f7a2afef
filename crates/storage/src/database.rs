//! Connection handle for the hosted Postgres row source.
//!
//! Repositories use runtime `sqlx::query_as`, not the checked `query_as!`
//! macros. The schema belongs to the hosted store, and builds must not need
//! a live `DATABASE_URL` or an offline query cache.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

/// Handle on the hosted Postgres row source.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        tracing::debug!("Postgres pool created");

        Ok(Self { pool })
    }

    /// Builds a handle whose connections are only opened on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
