use campus_core::error::CoreError;
use campus_db::error::DbError;
use thiserror::Error;

/// Seed loader errors.
///
/// Every variant means the run failed; the variant only sharpens the log message.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("Failed to apply migrations: {0}")]
    Migration(#[source] DbError),

    #[error("Failed to connect to the database: {0}")]
    Connect(#[source] DbError),

    #[error("Failed to seed {entity} '{key}': {source}")]
    Write {
        entity: &'static str,
        key: String,
        #[source]
        source: DbError,
    },

    #[error("Failed to release the database connection: {0}")]
    Release(#[source] DbError),
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;
