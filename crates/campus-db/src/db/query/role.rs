use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use campus_core::error::CoreError;

use super::Upserted;
use crate::db::connection::DbConnection;
use crate::db::schema::role;
use crate::error::DbResult;
use crate::model::role::{NewRole, Role};

/// ## Summary
/// Inserts a role unless one with the same name exists.
///
/// The update clause is empty: label, color class and permissions of an existing
/// role are never touched.
///
/// ## Errors
/// Returns a database error if the insert or the follow-up lookup fails.
#[tracing::instrument(skip(conn, new_role), fields(name = new_role.name))]
pub async fn upsert_role(conn: &mut DbConnection, new_role: &NewRole<'_>) -> DbResult<Upserted<Role>> {
    let inserted = diesel::insert_into(role::table)
        .values(new_role)
        .on_conflict(role::name)
        .do_nothing()
        .returning(Role::as_returning())
        .get_result(conn)
        .await
        .optional()?;

    if let Some(row) = inserted {
        return Ok(Upserted::Created(row));
    }

    let existing = find_role_by_name(conn, new_role.name)
        .await?
        .ok_or(CoreError::InvariantViolation("Role missing after insert conflict"))?;

    Ok(Upserted::Existing(existing))
}

/// ## Summary
/// Looks up a role by its unique name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_role_by_name(conn: &mut DbConnection, name: &str) -> DbResult<Option<Role>> {
    Ok(role::table
        .filter(role::name.eq(name))
        .select(Role::as_select())
        .first(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Lists all roles ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_roles(conn: &mut DbConnection) -> DbResult<Vec<Role>> {
    Ok(role::table
        .order(role::name.asc())
        .select(Role::as_select())
        .load(conn)
        .await?)
}
