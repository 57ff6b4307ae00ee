use std::process::ExitCode;

use campus_core::config::load_config;
use campus_db::db::migrate::run_migrations;
use campus_seed::error::{SeedError, SeedResult};
use campus_seed::runner::{SeedPlan, SeedReport, exit_status, run, run_on};
use campus_seed::store::memory::MemoryStore;
use campus_seed::store::pg::PgSeedStore;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[tokio::main]
async fn main() -> ExitCode {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!("Starting campus reference data seed");

    let result = seed(&filter_handle).await;

    if let Err(err) = &result {
        tracing::error!(error = %err, "Seeding failed");
        eprintln!("Seeding failed: {err}");
    }

    ExitCode::from(exit_status(&result))
}

async fn seed(filter_handle: &FilterHandle) -> SeedResult<SeedReport> {
    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let plan = SeedPlan::default();

    if config.seed.dry_run {
        tracing::info!("Dry run: seeding an in-memory store, the database is not touched");
        return run_on(MemoryStore::new(), &plan).await;
    }

    let database_url = config.database_url()?;

    if config.seed.run_migrations {
        run_migrations(database_url)
            .await
            .map_err(SeedError::Migration)?;
    }

    run(PgSeedStore::connect(database_url), &plan).await
}
