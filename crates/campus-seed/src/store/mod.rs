pub mod memory;
pub mod pg;

use campus_db::db::query::Upserted;
use campus_db::error::DbResult;
use campus_db::model::department::{Department, NewDepartment};
use campus_db::model::role::{NewRole, Role};

/// A destination for reference data that can upsert rows by natural key.
///
/// A store is acquired once per run and released through [`SeedStore::close`],
/// which consumes it.
pub trait SeedStore: Sized {
    /// Inserts a department unless its name already exists.
    ///
    /// ## Errors
    /// Returns an error if the store rejects the write.
    fn upsert_department(
        &mut self,
        new_department: &NewDepartment<'_>,
    ) -> impl Future<Output = DbResult<Upserted<Department>>>;

    /// Inserts a role unless its name already exists.
    ///
    /// ## Errors
    /// Returns an error if the store rejects the write.
    fn upsert_role(&mut self, new_role: &NewRole<'_>) -> impl Future<Output = DbResult<Upserted<Role>>>;

    /// Releases the underlying connection.
    ///
    /// ## Errors
    /// Returns an error if the connection could not be released cleanly.
    fn close(self) -> impl Future<Output = DbResult<()>>;
}
