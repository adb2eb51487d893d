use std::fmt;

use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::SchemaManager;
use tracing::instrument;

use crate::error::Result;
use crate::plan::{AuditOutcome, ColumnAction, Presence, SeedAction, TableAction};
use crate::priorities::{self, PRIORITIES_TABLE};
use crate::ticket_priority::{self, PRIORITY_ID_COLUMN, TICKETS_TABLE};

/// Read-only view of where the database stands relative to both migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub priorities_table: Presence,
    /// `None` when the table does not exist yet.
    pub priority_rows: Option<u64>,
    pub tickets_table: Presence,
    pub priority_id_column: Presence,
    /// `None` when the column does not exist yet.
    pub unresolved_tickets: Option<u64>,
}

impl StatusReport {
    pub fn table_action(&self) -> TableAction {
        TableAction::for_presence(self.priorities_table)
    }

    pub fn seed_action(&self) -> SeedAction {
        SeedAction::for_row_count(self.priority_rows.unwrap_or(0))
    }

    pub fn column_action(&self) -> ColumnAction {
        ColumnAction::for_presence(self.priority_id_column)
    }

    pub fn audit(&self) -> Option<AuditOutcome> {
        self.unresolved_tickets.map(AuditOutcome::from_null_count)
    }
}

/// Inspects the catalog and counts rows without writing anything.
#[instrument(skip(db))]
pub async fn inspect(db: &DatabaseConnection) -> Result<StatusReport> {
    let manager = SchemaManager::new(db);

    let priorities_table = Presence::from(manager.has_table(PRIORITIES_TABLE).await?);
    let priority_rows = match priorities_table {
        Presence::Present => Some(priorities::row_count(db).await?),
        Presence::Absent => None,
    };

    let tickets_table = Presence::from(manager.has_table(TICKETS_TABLE).await?);
    let priority_id_column = match tickets_table {
        Presence::Present => ticket_priority::column_presence(db).await?,
        Presence::Absent => Presence::Absent,
    };
    let unresolved_tickets = match priority_id_column {
        Presence::Present => Some(ticket_priority::unresolved_count(db).await?),
        Presence::Absent => None,
    };

    Ok(StatusReport {
        priorities_table,
        priority_rows,
        tickets_table,
        priority_id_column,
        unresolved_tickets,
    })
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table_action() {
            TableAction::Create => {
                writeln!(f, "À FAIRE - La table '{}' n'existe pas.", PRIORITIES_TABLE)?
            }
            TableAction::Keep => writeln!(f, "OK - La table '{}' existe.", PRIORITIES_TABLE)?,
        }
        match self.seed_action() {
            SeedAction::Insert => writeln!(f, "À FAIRE - Aucune priorité de référence insérée.")?,
            SeedAction::Skip { existing } => {
                writeln!(f, "OK - La table contient {} priorité(s).", existing)?
            }
        }

        if self.tickets_table == Presence::Absent {
            return writeln!(f, "ATTENTION - La table '{}' n'existe pas.", TICKETS_TABLE);
        }

        match self.column_action() {
            ColumnAction::Add => writeln!(
                f,
                "À FAIRE - La colonne '{}' n'existe pas dans '{}'.",
                PRIORITY_ID_COLUMN, TICKETS_TABLE
            )?,
            ColumnAction::Keep => writeln!(
                f,
                "OK - La colonne '{}' existe dans '{}'.",
                PRIORITY_ID_COLUMN, TICKETS_TABLE
            )?,
        }
        match self.audit() {
            Some(AuditOutcome::Complete) => {
                writeln!(f, "OK - Tous les tickets ont un priority_id renseigné.")
            }
            Some(AuditOutcome::Unresolved { tickets }) => writeln!(
                f,
                "ATTENTION - {} ticket(s) ont priority_id NULL.",
                tickets
            ),
            None => Ok(()),
        }
    }
}
