use crate::data::{DEPARTMENTS, DepartmentSeed};
use crate::error::{SeedError, SeedResult};
use crate::store::SeedStore;

use super::{SeedStage, Seeder, StageReport};

pub struct DepartmentSeeder {
    pub departments: &'static [DepartmentSeed],
}

impl DepartmentSeeder {
    #[must_use]
    pub fn new(departments: &'static [DepartmentSeed]) -> Self {
        Self { departments }
    }

    /// Seeder for the portal's baseline departments.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(DEPARTMENTS)
    }
}

impl Seeder for DepartmentSeeder {
    #[tracing::instrument(skip_all, fields(count = self.departments.len()))]
    async fn seed<S: SeedStore>(&self, store: &mut S) -> SeedResult<StageReport> {
        let mut report = StageReport::new(SeedStage::Departments);

        for seed in self.departments {
            let outcome = store
                .upsert_department(&seed.to_new_department())
                .await
                .map_err(|source| SeedError::Write {
                    entity: "department",
                    key: seed.name.to_string(),
                    source,
                })?;
            tracing::debug!(
                name = seed.name,
                outcome = outcome.outcome(),
                "Department upserted"
            );
            report.record(&outcome);
        }

        tracing::info!(
            created = report.created,
            existing = report.existing,
            "Departments seeded"
        );
        Ok(report)
    }
}
