use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use tracing::{debug, error, trace};

use crate::error::Result;

/// Runs one statement in its own transaction and commits it.
///
/// On failure the transaction is rolled back and the statement's own error
/// is returned, even if the rollback fails too. Earlier committed steps are
/// kept and a rerun resumes from here.
/// Returns the number of rows affected.
pub(crate) async fn execute_committed(db: &DatabaseConnection, stmt: Statement) -> Result<u64> {
    trace!("Executing committed step: {}", stmt.sql);
    let txn = db.begin().await?;

    match txn.execute(stmt).await {
        Ok(result) => {
            txn.commit().await?;
            debug!("Step committed, {} row(s) affected", result.rows_affected());
            Ok(result.rows_affected())
        }
        Err(e) => {
            error!("Step failed, rolling back: {}", e);
            // The statement error is what the operator needs to see
            if let Err(rollback_err) = txn.rollback().await {
                error!("Rollback failed: {}", rollback_err);
            }
            Err(e.into())
        }
    }
}
