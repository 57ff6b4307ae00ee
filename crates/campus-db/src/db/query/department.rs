use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use campus_core::error::CoreError;

use super::Upserted;
use crate::db::connection::DbConnection;
use crate::db::schema::department;
use crate::error::DbResult;
use crate::model::department::{Department, NewDepartment};

/// ## Summary
/// Inserts a department unless one with the same name exists.
///
/// An existing row is returned unchanged; its `faculty` is never updated.
///
/// ## Errors
/// Returns a database error if the insert or the follow-up lookup fails.
#[tracing::instrument(skip(conn, new_department), fields(name = new_department.name))]
pub async fn upsert_department(
    conn: &mut DbConnection,
    new_department: &NewDepartment<'_>,
) -> DbResult<Upserted<Department>> {
    let inserted = diesel::insert_into(department::table)
        .values(new_department)
        .on_conflict(department::name)
        .do_nothing()
        .returning(Department::as_returning())
        .get_result(conn)
        .await
        .optional()?;

    if let Some(row) = inserted {
        return Ok(Upserted::Created(row));
    }

    let existing = find_department_by_name(conn, new_department.name)
        .await?
        .ok_or(CoreError::InvariantViolation(
            "Department missing after insert conflict",
        ))?;

    Ok(Upserted::Existing(existing))
}

/// ## Summary
/// Looks up a department by its unique name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_department_by_name(
    conn: &mut DbConnection,
    name: &str,
) -> DbResult<Option<Department>> {
    Ok(department::table
        .filter(department::name.eq(name))
        .select(Department::as_select())
        .first(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Lists all departments ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_departments(conn: &mut DbConnection) -> DbResult<Vec<Department>> {
    Ok(department::table
        .order(department::name.asc())
        .select(Department::as_select())
        .load(conn)
        .await?)
}
