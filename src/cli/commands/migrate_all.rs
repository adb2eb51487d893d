use anyhow::Result;
use tracing::{debug, info, trace};

use super::migration_failed;
use crate::config::DatabaseConfig;

/// Runs both migrations in order on a single connection, stopping at the
/// first failure.
pub async fn migrate_all(config: &DatabaseConfig) -> Result<()> {
    trace!("Entering migrate_all function");

    let db = config.connect().await.map_err(migration_failed)?;
    debug!("Database connection established");

    info!("Step 1/2: priorities table");
    let init = migration::create_priorities_table(&db)
        .await
        .map_err(migration_failed)?;
    debug!(?init, "Priorities initializer finished");

    println!();

    info!("Step 2/2: tickets.priority_id");
    let backfill = migration::migrate_priority_id(&db)
        .await
        .map_err(migration_failed)?;
    debug!(?backfill, "Backfill finished");

    db.close().await.map_err(|e| migration_failed(e.into()))?;
    info!("All priority migrations completed");

    Ok(())
}
