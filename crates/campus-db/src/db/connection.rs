use diesel_async::{AsyncConnection, AsyncPgConnection};

use crate::error::DbResult;

pub type DbConnection = AsyncPgConnection;

/// ## Summary
/// Opens a single database connection.
///
/// The seed loader owns exactly one connection for the whole run, so no pool is
/// involved. Dropping the returned connection closes it.
///
/// ## Errors
/// Returns an error if the connection cannot be established with the provided URL.
#[tracing::instrument(skip(database_url))]
pub async fn establish(database_url: &str) -> DbResult<DbConnection> {
    tracing::debug!("Opening database connection");

    let conn = AsyncPgConnection::establish(database_url).await?;

    tracing::info!("Database connection established");

    Ok(conn)
}
