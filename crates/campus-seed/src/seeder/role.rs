use crate::data::{ROLES, RoleSeed};
use crate::error::{SeedError, SeedResult};
use crate::store::SeedStore;

use super::{SeedStage, Seeder, StageReport};

pub struct RoleSeeder {
    pub roles: &'static [RoleSeed],
}

impl RoleSeeder {
    #[must_use]
    pub fn new(roles: &'static [RoleSeed]) -> Self {
        Self { roles }
    }

    /// Seeder for the full role catalogue, in catalogue order.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(ROLES)
    }
}

impl Seeder for RoleSeeder {
    #[tracing::instrument(skip_all, fields(count = self.roles.len()))]
    async fn seed<S: SeedStore>(&self, store: &mut S) -> SeedResult<StageReport> {
        let mut report = StageReport::new(SeedStage::Roles);

        for seed in self.roles {
            let outcome = store
                .upsert_role(&seed.to_new_role())
                .await
                .map_err(|source| SeedError::Write {
                    entity: "role",
                    key: seed.name.to_string(),
                    source,
                })?;
            tracing::debug!(
                name = seed.name,
                outcome = outcome.outcome(),
                permissions = seed.permissions.len(),
                "Role upserted"
            );
            report.record(&outcome);
        }

        tracing::info!(
            created = report.created,
            existing = report.existing,
            "Roles seeded"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test_log::test(tokio::test)]
    async fn seeds_roles_in_catalogue_order() {
        let store = MemoryStore::new();
        let mut handle = store.clone();

        let report = RoleSeeder::reference()
            .seed(&mut handle)
            .await
            .expect("roles seed");

        assert_eq!(report.created, ROLES.len());
        assert_eq!(report.existing, 0);

        let names: Vec<_> = store.roles().into_iter().map(|r| r.name).collect();
        let expected: Vec<_> = ROLES.iter().map(|r| r.name.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test_log::test(tokio::test)]
    async fn failed_write_names_the_role() {
        // Third role is "student".
        let mut store = MemoryStore::failing_from(3);

        let err = RoleSeeder::reference()
            .seed(&mut store)
            .await
            .expect_err("third write is rejected");

        match err {
            SeedError::Write { entity, key, .. } => {
                assert_eq!(entity, "role");
                assert_eq!(key, "student");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.roles().len(), 2);
    }
}
