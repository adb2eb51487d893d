use sea_orm::DbErr;
use thiserror::Error;

/// Error types for the priority migrations
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A table the migration depends on does not exist
    #[error("La table '{0}' n'existe pas")]
    MissingTable(&'static str),
}

/// Type alias for Result with MigrationError
pub type Result<T> = std::result::Result<T, MigrationError>;
