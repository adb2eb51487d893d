use model::entities::{prelude::*, priority};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, QueryTrait, Set,
};
use sea_orm_migration::{prelude::*, schema::*};
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::plan::{missing_codes, Presence, SeedAction, TableAction};
use crate::step::execute_committed;

pub const PRIORITIES_TABLE: &str = "priorities";

/// One of the reference priorities inserted into an empty `priorities` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySeed {
    pub code: &'static str,
    pub label: &'static str,
    pub color_hex: &'static str,
    pub background_hex: &'static str,
    pub display_order: i32,
}

/// Codes match the values of the application's ticket priority enum.
pub const CANONICAL_PRIORITIES: [PrioritySeed; 4] = [
    PrioritySeed {
        code: "critique",
        label: "Critique",
        color_hex: "#E53E3E",
        background_hex: "rgba(229, 62, 62, 0.1)",
        display_order: 1,
    },
    PrioritySeed {
        code: "haute",
        label: "Haute",
        color_hex: "#F59E0B",
        background_hex: "rgba(245, 158, 11, 0.1)",
        display_order: 2,
    },
    PrioritySeed {
        code: "moyenne",
        label: "Moyenne",
        color_hex: "#0DADDB",
        background_hex: "rgba(13, 173, 219, 0.1)",
        display_order: 3,
    },
    PrioritySeed {
        code: "faible",
        label: "Faible",
        color_hex: "#6B7280",
        background_hex: "#E5E7EB",
        display_order: 4,
    },
];

impl PrioritySeed {
    fn to_active_model(self) -> priority::ActiveModel {
        priority::ActiveModel {
            code: Set(self.code.to_string()),
            label: Set(self.label.to_string()),
            color_hex: Set(Some(self.color_hex.to_string())),
            background_hex: Set(Some(self.background_hex.to_string())),
            display_order: Set(Some(self.display_order)),
            is_active: Set(Some(true)),
            ..Default::default()
        }
    }
}

pub fn canonical_codes() -> Vec<&'static str> {
    CANONICAL_PRIORITIES.iter().map(|p| p.code).collect()
}

/// What the initializer did on this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub table: TableAction,
    pub seed: SeedAction,
    /// Canonical codes absent from a table that was already populated.
    /// Always empty when the table was seeded by this run.
    pub missing_codes: Vec<&'static str>,
}

pub fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Priorities::Table)
        .if_not_exists()
        .col(pk_auto(Priorities::Id))
        .col(string_len(Priorities::Code, 50).unique_key())
        .col(string_len(Priorities::Label, 100))
        .col(string_len_null(Priorities::ColorHex, 20))
        .col(string_len_null(Priorities::BackgroundHex, 80))
        .col(integer_null(Priorities::DisplayOrder).default(0))
        .col(boolean_null(Priorities::IsActive).default(true))
        .to_owned()
}

pub async fn table_presence(db: &DatabaseConnection) -> Result<Presence> {
    let manager = SchemaManager::new(db);
    Ok(Presence::from(manager.has_table(PRIORITIES_TABLE).await?))
}

pub async fn row_count(db: &DatabaseConnection) -> Result<u64> {
    Ok(Priority::find().count(db).await?)
}

async fn missing_canonical_codes(db: &DatabaseConnection) -> Result<Vec<&'static str>> {
    let present: Vec<String> = Priority::find()
        .select_only()
        .column(priority::Column::Code)
        .into_tuple()
        .all(db)
        .await?;
    Ok(missing_codes(&canonical_codes(), &present))
}

/// Creates the `priorities` table if needed and seeds it when empty.
///
/// Safe to run repeatedly: table creation and seeding are committed
/// separately and each is skipped once done. Never touches `tickets`.
#[instrument(skip(db))]
pub async fn create_priorities_table(db: &DatabaseConnection) -> Result<InitReport> {
    let backend = db.get_database_backend();

    let table = TableAction::for_presence(table_presence(db).await?);
    match table {
        TableAction::Create => {
            println!("Création de la table '{}'...", PRIORITIES_TABLE);
            execute_committed(db, backend.build(&create_table_statement())).await?;
            info!("Created table {}", PRIORITIES_TABLE);
            println!("OK - Table '{}' créée.", PRIORITIES_TABLE);
        }
        TableAction::Keep => {
            debug!("Table {} already present", PRIORITIES_TABLE);
            println!("OK - La table '{}' existe déjà.", PRIORITIES_TABLE);
        }
    }

    let seed = SeedAction::for_row_count(row_count(db).await?);
    let mut missing = Vec::new();
    match seed {
        SeedAction::Insert => {
            println!(
                "Insertion des {} priorités de référence...",
                CANONICAL_PRIORITIES.len()
            );
            let insert = Priority::insert_many(
                CANONICAL_PRIORITIES.iter().map(|p| p.to_active_model()),
            )
            .build(backend);
            let inserted = execute_committed(db, insert).await?;
            info!("Seeded {} priorities", inserted);
            println!(
                "OK - {} priorités insérées ({}).",
                CANONICAL_PRIORITIES.len(),
                canonical_codes().join(", ")
            );
        }
        SeedAction::Skip { existing } => {
            println!(
                "OK - La table contient déjà {} priorité(s), aucune insertion.",
                existing
            );
            missing = missing_canonical_codes(db).await?;
            if !missing.is_empty() {
                warn!(?missing, "Populated priorities table lacks reference codes");
                println!(
                    "ATTENTION - Codes de référence absents de la table '{}' : {} (aucune correction automatique).",
                    PRIORITIES_TABLE,
                    missing.join(", ")
                );
            }
        }
    }

    println!("\nMigration terminée avec succès. Aucune donnée ticket n'a été modifiée.");

    Ok(InitReport {
        table,
        seed,
        missing_codes: missing,
    })
}

#[derive(DeriveIden)]
enum Priorities {
    Table,
    Id,
    Code,
    Label,
    ColorHex,
    BackgroundHex,
    DisplayOrder,
    IsActive,
}
