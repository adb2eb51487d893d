use anyhow::Result;
use tracing::{debug, trace};

use super::inspection_failed;
use crate::config::DatabaseConfig;

pub async fn status(config: &DatabaseConfig) -> Result<()> {
    trace!("Entering status function");

    let db = config.connect().await.map_err(inspection_failed)?;
    let report = migration::inspect(&db).await.map_err(inspection_failed)?;
    debug!(?report, "Database inspected");

    print!("{}", report);

    db.close().await.map_err(|e| inspection_failed(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigrationError;

    #[tokio::test]
    async fn test_status_on_empty_database() {
        let config = DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
            ..Default::default()
        };
        status(&config).await.unwrap();
    }

    #[tokio::test]
    async fn test_status_on_unreachable_database() {
        let config = DatabaseConfig {
            url: Some("sqlite:///nonexistent-dir/ticket-priorities/db.sqlite?mode=ro".to_string()),
            ..Default::default()
        };

        let err = status(&config).await.unwrap_err();
        assert!(err.downcast_ref::<MigrationError>().is_some());
    }
}
