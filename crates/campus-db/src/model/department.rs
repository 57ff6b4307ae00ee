use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::department)]
#[diesel(check_for_backend(Pg))]
pub struct Department {
    pub id: uuid::Uuid,
    pub name: String,
    pub faculty: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A department keyed by its unique `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::department)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
    pub faculty: &'a str,
}
