use anyhow::Result;
use tracing::{debug, info, trace};

use super::migration_failed;
use crate::config::DatabaseConfig;

pub async fn migrate_priority_id(config: &DatabaseConfig) -> Result<()> {
    trace!("Entering migrate_priority_id function");
    info!("Backfilling tickets.priority_id");

    let db = config.connect().await.map_err(migration_failed)?;
    debug!("Database connection established");

    let report = migration::migrate_priority_id(&db)
        .await
        .map_err(migration_failed)?;
    debug!(?report, "Backfill finished");

    db.close().await.map_err(|e| migration_failed(e.into()))?;
    info!("tickets.priority_id migration completed");
    trace!("migrate_priority_id function completed");

    Ok(())
}
