pub mod department;
pub mod role;

use campus_db::db::query::Upserted;

use crate::error::SeedResult;
use crate::store::SeedStore;

/// A group of reference rows seeded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStage {
    Departments,
    Roles,
}

impl SeedStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Departments => "departments",
            Self::Roles => "roles",
        }
    }
}

impl std::fmt::Display for SeedStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stage tally of upsert outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub stage: SeedStage,
    pub created: usize,
    pub existing: usize,
}

impl StageReport {
    #[must_use]
    pub fn new(stage: SeedStage) -> Self {
        Self {
            stage,
            created: 0,
            existing: 0,
        }
    }

    pub fn record<T>(&mut self, outcome: &Upserted<T>) {
        if outcome.is_created() {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

/// Trait for seeders that bring one set of reference rows to its baseline.
pub trait Seeder {
    /// Seeds the store with this seeder's rows, one upsert at a time.
    ///
    /// ## Errors
    /// Returns an error on the first write the store rejects.
    fn seed<S: SeedStore>(&self, store: &mut S) -> impl Future<Output = SeedResult<StageReport>>;
}
