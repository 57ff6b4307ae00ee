//! Seed run: acquire a store, run the stages of a plan in order, release the store.
//!
//! The store is released exactly once on every path that acquired it. Each upsert
//! commits on its own, so rows written before a failure stay in place.

use campus_db::error::DbResult;

use crate::error::{SeedError, SeedResult};
use crate::seeder::department::DepartmentSeeder;
use crate::seeder::role::RoleSeeder;
use crate::seeder::{SeedStage, Seeder, StageReport};
use crate::store::SeedStore;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Ordered list of stages to seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    stages: Vec<SeedStage>,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::new(vec![SeedStage::Departments, SeedStage::Roles])
    }
}

impl SeedPlan {
    #[must_use]
    pub fn new(stages: Vec<SeedStage>) -> Self {
        Self { stages }
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.stages.reverse();
        self
    }

    #[must_use]
    pub fn stages(&self) -> &[SeedStage] {
        &self.stages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failure,
}

/// Lifecycle of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    Start,
    ConnectEstablished,
    DepartmentsUpserted,
    RolesUpserted,
    Disconnected(RunOutcome),
}

impl SeedState {
    /// State reached once `stage` completes.
    #[must_use]
    pub fn after(stage: SeedStage) -> Self {
        match stage {
            SeedStage::Departments => Self::DepartmentsUpserted,
            SeedStage::Roles => Self::RolesUpserted,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub stages: Vec<StageReport>,
    /// States visited, from `Start` to `Disconnected(Success)`.
    pub trace: Vec<SeedState>,
}

impl SeedReport {
    #[must_use]
    pub fn stage(&self, stage: SeedStage) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.stages.iter().map(|report| report.created).sum()
    }

    #[must_use]
    pub fn existing(&self) -> usize {
        self.stages.iter().map(|report| report.existing).sum()
    }
}

fn advance(trace: &mut Vec<SeedState>, next: SeedState) {
    if let SeedState::Disconnected(outcome) = next {
        tracing::info!(?outcome, "Seed run finished");
    } else {
        tracing::debug!(from = ?trace.last(), to = ?next, "Seed state transition");
    }
    trace.push(next);
}

/// ## Summary
/// Runs `plan` against the store produced by `connect`.
///
/// ## Errors
/// Returns [`SeedError::Connect`] if the store cannot be acquired, the first
/// [`SeedError::Write`] of a stage, or [`SeedError::Release`] if releasing the
/// store fails after an otherwise successful run.
pub async fn run<S, C>(connect: C, plan: &SeedPlan) -> SeedResult<SeedReport>
where
    S: SeedStore,
    C: Future<Output = DbResult<S>>,
{
    let mut trace = Vec::new();
    let stages = run_traced(connect, plan, &mut trace).await?;
    let report = SeedReport { stages, trace };

    tracing::info!(
        created = report.created(),
        existing = report.existing(),
        "Seeding completed"
    );
    Ok(report)
}

/// ## Summary
/// Same as [`run`], but records every state visited into `trace`, on failure
/// paths as well. The last entry is always `Disconnected`.
///
/// ## Errors
/// See [`run`].
pub async fn run_traced<S, C>(
    connect: C,
    plan: &SeedPlan,
    trace: &mut Vec<SeedState>,
) -> SeedResult<Vec<StageReport>>
where
    S: SeedStore,
    C: Future<Output = DbResult<S>>,
{
    trace.push(SeedState::Start);
    tracing::info!(stages = ?plan.stages(), "Seeding reference data");

    let mut store = match connect.await {
        Ok(store) => store,
        Err(err) => {
            advance(trace, SeedState::Disconnected(RunOutcome::Failure));
            return Err(SeedError::Connect(err));
        }
    };
    advance(trace, SeedState::ConnectEstablished);

    let seeded = seed_stages(&mut store, plan, trace).await;
    let released = store.close().await;

    let result = match (seeded, released) {
        (Ok(stages), Ok(())) => Ok(stages),
        (Ok(_), Err(err)) => Err(SeedError::Release(err)),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            tracing::warn!(error = %close_err, "Failed to release connection after seed failure");
            Err(err)
        }
    };

    let outcome = if result.is_ok() {
        RunOutcome::Success
    } else {
        RunOutcome::Failure
    };
    advance(trace, SeedState::Disconnected(outcome));

    result
}

/// ## Summary
/// Runs `plan` against an already acquired store.
///
/// ## Errors
/// See [`run`].
pub async fn run_on<S: SeedStore>(store: S, plan: &SeedPlan) -> SeedResult<SeedReport> {
    run(std::future::ready(Ok(store)), plan).await
}

async fn seed_stages<S: SeedStore>(
    store: &mut S,
    plan: &SeedPlan,
    trace: &mut Vec<SeedState>,
) -> SeedResult<Vec<StageReport>> {
    let mut reports = Vec::with_capacity(plan.stages().len());

    for &stage in plan.stages() {
        let report = match stage {
            SeedStage::Departments => DepartmentSeeder::reference().seed(store).await?,
            SeedStage::Roles => RoleSeeder::reference().seed(store).await?,
        };
        reports.push(report);
        advance(trace, SeedState::after(stage));
    }

    Ok(reports)
}

/// Process exit status for a finished run.
#[must_use]
pub fn exit_status<T>(result: &SeedResult<T>) -> u8 {
    if result.is_ok() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
