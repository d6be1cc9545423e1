use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored car {id} is unreadable: {reason}")]
    Corrupt { id: i64, reason: String },
}
