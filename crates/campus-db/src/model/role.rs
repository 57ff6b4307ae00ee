use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::role)]
#[diesel(check_for_backend(Pg))]
pub struct Role {
    pub id: uuid::Uuid,
    pub name: String,
    pub label: String,
    pub color_class: String,
    /// Human-readable permissions, in display order.
    pub permissions: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A role keyed by its unique lowercase `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::role)]
pub struct NewRole<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub color_class: &'a str,
    pub permissions: Vec<String>,
}
