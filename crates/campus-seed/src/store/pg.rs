use campus_db::db::connection::{DbConnection, establish};
use campus_db::db::query::{Upserted, department, role};
use campus_db::error::DbResult;
use campus_db::model::department::{Department, NewDepartment};
use campus_db::model::role::{NewRole, Role};

use super::SeedStore;

/// PostgreSQL-backed store owning a single connection.
pub struct PgSeedStore {
    conn: DbConnection,
}

impl PgSeedStore {
    /// ## Summary
    /// Connects to the database at `database_url`.
    ///
    /// ## Errors
    /// Returns an error if the connection cannot be established.
    pub async fn connect(database_url: &str) -> DbResult<Self> {
        let conn = establish(database_url).await?;
        Ok(Self { conn })
    }
}

impl SeedStore for PgSeedStore {
    async fn upsert_department(
        &mut self,
        new_department: &NewDepartment<'_>,
    ) -> DbResult<Upserted<Department>> {
        department::upsert_department(&mut self.conn, new_department).await
    }

    async fn upsert_role(&mut self, new_role: &NewRole<'_>) -> DbResult<Upserted<Role>> {
        role::upsert_role(&mut self.conn, new_role).await
    }

    #[tracing::instrument(skip(self))]
    async fn close(self) -> DbResult<()> {
        drop(self.conn);
        tracing::info!("Database connection released");
        Ok(())
    }
}
