//! In-memory store used for dry runs and tests.
//!
//! Handles are cheap clones sharing the same tables, so a caller can keep one handle
//! for inspection while another is consumed by a run.

use std::sync::{Arc, Mutex, MutexGuard};

use campus_db::db::query::Upserted;
use campus_db::error::{DbError, DbResult};
use campus_db::model::department::{Department, NewDepartment};
use campus_db::model::role::{NewRole, Role};

use super::SeedStore;

#[derive(Debug, Default)]
struct Tables {
    departments: Vec<Department>,
    roles: Vec<Role>,
    writes: usize,
    /// 1-based index of the first write to reject.
    fail_from: Option<usize>,
    fail_close: bool,
    closes: usize,
}

impl Tables {
    /// Counts a write and rejects it once the failure threshold is reached.
    fn begin_write(&mut self) -> DbResult<()> {
        self.writes += 1;
        match self.fail_from {
            Some(threshold) if self.writes >= threshold => Err(DbError::ConnectionError(
                diesel::ConnectionError::BadConnection(format!(
                    "store unavailable (write {})",
                    self.writes
                )),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, as if the connection were gone.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::failing_from(1)
    }

    /// A store that accepts `write - 1` writes and rejects the rest.
    #[must_use]
    pub fn failing_from(write: usize) -> Self {
        let store = Self::new();
        store.lock().fail_from = Some(write);
        store
    }

    /// Makes `close` report an error. The close is still counted.
    #[must_use]
    pub fn with_failing_close(self) -> Self {
        self.lock().fail_close = true;
        self
    }

    /// Accepts writes again.
    pub fn recover(&self) {
        self.lock().fail_from = None;
    }

    #[must_use]
    pub fn departments(&self) -> Vec<Department> {
        self.lock().departments.clone()
    }

    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        self.lock().roles.clone()
    }

    #[must_use]
    pub fn department_by_name(&self, name: &str) -> Option<Department> {
        self.lock()
            .departments
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }

    #[must_use]
    pub fn role_by_name(&self, name: &str) -> Option<Role> {
        self.lock().roles.iter().find(|r| r.name == name).cloned()
    }

    /// Number of write attempts, including rejected ones.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Number of times any handle has been closed.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.lock().closes
    }

    /// Locks the tables and recovers from poisoning.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.tables.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl SeedStore for MemoryStore {
    async fn upsert_department(
        &mut self,
        new_department: &NewDepartment<'_>,
    ) -> DbResult<Upserted<Department>> {
        let mut tables = self.lock();
        tables.begin_write()?;

        if let Some(existing) = tables
            .departments
            .iter()
            .find(|d| d.name == new_department.name)
        {
            return Ok(Upserted::Existing(existing.clone()));
        }

        let now = chrono::Utc::now();
        let row = Department {
            id: uuid::Uuid::now_v7(),
            name: new_department.name.to_string(),
            faculty: new_department.faculty.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.departments.push(row.clone());
        Ok(Upserted::Created(row))
    }

    async fn upsert_role(&mut self, new_role: &NewRole<'_>) -> DbResult<Upserted<Role>> {
        let mut tables = self.lock();
        tables.begin_write()?;

        if let Some(existing) = tables.roles.iter().find(|r| r.name == new_role.name) {
            return Ok(Upserted::Existing(existing.clone()));
        }

        let now = chrono::Utc::now();
        let row = Role {
            id: uuid::Uuid::now_v7(),
            name: new_role.name.to_string(),
            label: new_role.label.to_string(),
            color_class: new_role.color_class.to_string(),
            permissions: new_role.permissions.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.roles.push(row.clone());
        Ok(Upserted::Created(row))
    }

    async fn close(self) -> DbResult<()> {
        let mut tables = self.lock();
        tables.closes += 1;
        if tables.fail_close {
            return Err(DbError::ConnectionError(
                diesel::ConnectionError::BadConnection("close failed".to_string()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_role<'a>(name: &'a str, label: &'a str) -> NewRole<'a> {
        NewRole {
            name,
            label,
            color_class: "bg-gray-100",
            permissions: vec!["View".to_string()],
        }
    }

    #[test_log::test(tokio::test)]
    async fn existing_role_is_left_untouched() {
        let mut store = MemoryStore::new();

        let first = store
            .upsert_role(&new_role("finance", "Finance"))
            .await
            .expect("first upsert succeeds");
        let second = store
            .upsert_role(&new_role("finance", "Accounts"))
            .await
            .expect("second upsert succeeds");

        assert!(first.is_created());
        assert!(!second.is_created());
        assert_eq!(second.get().label, "Finance");
        assert_eq!(first.get().id, second.get().id);
        assert_eq!(store.roles().len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn existing_department_keeps_its_faculty() {
        let mut store = MemoryStore::new();
        let original = NewDepartment {
            name: "Mathematics",
            faculty: "Science",
        };
        let conflicting = NewDepartment {
            name: "Mathematics",
            faculty: "Arts",
        };

        store.upsert_department(&original).await.expect("insert");
        let outcome = store
            .upsert_department(&conflicting)
            .await
            .expect("conflicting upsert");

        assert_eq!(outcome.outcome(), "existing");
        assert_eq!(
            store
                .department_by_name("Mathematics")
                .map(|d| d.faculty),
            Some("Science".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn failing_store_rejects_from_threshold() {
        let mut store = MemoryStore::failing_from(2);

        assert!(store.upsert_role(&new_role("admin", "Administrator")).await.is_ok());
        assert!(store.upsert_role(&new_role("teacher", "Teacher")).await.is_err());
        assert!(store.upsert_role(&new_role("student", "Student")).await.is_err());
        assert_eq!(store.write_count(), 3);
        assert_eq!(store.roles().len(), 1);

        store.recover();
        assert!(store.upsert_role(&new_role("teacher", "Teacher")).await.is_ok());
    }

    #[test_log::test(tokio::test)]
    async fn clones_share_tables_and_close_count() {
        let store = MemoryStore::new();
        let mut handle = store.clone();

        handle
            .upsert_role(&new_role("hr", "Human Resources"))
            .await
            .expect("insert");
        handle.close().await.expect("close");

        assert!(store.role_by_name("hr").is_some());
        assert_eq!(store.close_count(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn failing_close_is_still_counted() {
        let store = MemoryStore::new().with_failing_close();

        assert!(store.clone().close().await.is_err());
        assert_eq!(store.close_count(), 1);
    }
}
