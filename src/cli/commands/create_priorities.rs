use anyhow::Result;
use tracing::{debug, info, trace};

use super::migration_failed;
use crate::config::DatabaseConfig;

pub async fn create_priorities(config: &DatabaseConfig) -> Result<()> {
    trace!("Entering create_priorities function");
    info!("Creating priorities reference table");

    let db = config.connect().await.map_err(migration_failed)?;
    debug!("Database connection established");

    let report = migration::create_priorities_table(&db)
        .await
        .map_err(migration_failed)?;
    debug!(?report, "Priorities initializer finished");

    db.close().await.map_err(|e| migration_failed(e.into()))?;
    info!("Priorities table ready");
    trace!("create_priorities function completed");

    Ok(())
}
