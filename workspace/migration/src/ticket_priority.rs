use model::entities::{prelude::*, ticket};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Statement,
};
use sea_orm_migration::prelude::SchemaManager;
use tracing::{debug, info, instrument, warn};

use crate::error::{MigrationError, Result};
use crate::plan::{AuditOutcome, ColumnAction, Presence};
use crate::priorities::PRIORITIES_TABLE;
use crate::step::execute_committed;

pub const TICKETS_TABLE: &str = "tickets";
pub const PRIORITY_ID_COLUMN: &str = "priority_id";

const ADD_PRIORITY_ID_SQL: &str =
    "ALTER TABLE tickets ADD COLUMN priority_id INTEGER REFERENCES priorities(id)";

// The legacy column is an enum on PostgreSQL, hence the cast before
// comparing it with the reference codes.
const BACKFILL_PRIORITY_ID_SQL: &str = r#"UPDATE tickets AS t
SET priority_id = p.id
FROM priorities AS p
WHERE p.code = CAST(t.priority AS TEXT)
  AND t.priority_id IS NULL"#;

/// What the backfill did on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillReport {
    pub column: ColumnAction,
    /// Tickets that received a `priority_id` on this run.
    pub updated: u64,
    pub audit: AuditOutcome,
}

pub async fn column_presence(db: &DatabaseConnection) -> Result<Presence> {
    let manager = SchemaManager::new(db);
    Ok(Presence::from(
        manager.has_column(TICKETS_TABLE, PRIORITY_ID_COLUMN).await?,
    ))
}

/// Counts tickets without a `priority_id`. The column must exist.
pub async fn unresolved_count(db: &DatabaseConnection) -> Result<u64> {
    Ok(Ticket::find()
        .filter(ticket::Column::PriorityId.is_null())
        .count(db)
        .await?)
}

async fn require_table(manager: &SchemaManager<'_>, table: &'static str) -> Result<()> {
    if manager.has_table(table).await? {
        Ok(())
    } else {
        Err(MigrationError::MissingTable(table))
    }
}

/// Adds `tickets.priority_id` if missing and fills it from the legacy
/// `priority` column.
///
/// Must run after [`crate::create_priorities_table`]. Only tickets whose
/// `priority_id` is still null are updated, so reruns are harmless. The
/// legacy `priority` column is left exactly as it was.
#[instrument(skip(db))]
pub async fn migrate_priority_id(db: &DatabaseConnection) -> Result<BackfillReport> {
    let backend = db.get_database_backend();

    {
        let manager = SchemaManager::new(db);
        require_table(&manager, PRIORITIES_TABLE).await?;
        require_table(&manager, TICKETS_TABLE).await?;
    }

    let column = ColumnAction::for_presence(column_presence(db).await?);
    match column {
        ColumnAction::Add => {
            println!(
                "Ajout de la colonne '{}' à la table '{}'...",
                PRIORITY_ID_COLUMN, TICKETS_TABLE
            );
            execute_committed(db, Statement::from_string(backend, ADD_PRIORITY_ID_SQL)).await?;
            info!("Added column {}.{}", TICKETS_TABLE, PRIORITY_ID_COLUMN);
            println!("OK - Colonne '{}' ajoutée.", PRIORITY_ID_COLUMN);
        }
        ColumnAction::Keep => {
            debug!("Column {}.{} already present", TICKETS_TABLE, PRIORITY_ID_COLUMN);
            println!(
                "OK - La colonne '{}' existe déjà dans '{}'.",
                PRIORITY_ID_COLUMN, TICKETS_TABLE
            );
        }
    }

    println!("Remplissage de priority_id à partir des valeurs de priority...");
    let updated =
        execute_committed(db, Statement::from_string(backend, BACKFILL_PRIORITY_ID_SQL)).await?;
    info!("Backfilled priority_id on {} ticket(s)", updated);
    println!("OK - {} ligne(s) mise(s) à jour.", updated);

    let audit = AuditOutcome::from_null_count(unresolved_count(db).await?);
    match audit {
        AuditOutcome::Complete => {
            println!("OK - Tous les tickets ont un priority_id renseigné.");
        }
        AuditOutcome::Unresolved { tickets } => {
            warn!(tickets = tickets, "Tickets left without priority_id");
            println!(
                "ATTENTION - {} ticket(s) ont encore priority_id NULL (priorité non trouvée dans la table {}).",
                tickets, PRIORITIES_TABLE
            );
        }
    }

    println!("\nMigration terminée. La colonne 'priority' n'a pas été modifiée ni supprimée.");
    println!("Aucune donnée n'a été perdue.");

    Ok(BackfillReport {
        column,
        updated,
        audit,
    })
}
