use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the row source could not be reached at all, as opposed to a
    /// query that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }

    /// Postgres rejected a bound id as malformed text for its column type
    /// (`invalid_text_representation`).
    pub fn is_invalid_id(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("22P02")
        )
    }

    /// A lookup by an id that cannot exist is reported as not found.
    pub fn invalid_id_as_not_found(self) -> Self {
        if self.is_invalid_id() {
            StorageError::NotFound
        } else {
            self
        }
    }
}
