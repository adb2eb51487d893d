use sea_orm::entity::prelude::*;

/// The subset of the application's `tickets` table this tool works with.
///
/// The table is owned by the ticketing application and carries many more
/// columns. On PostgreSQL `priority` is an enum type, so code that must run
/// there never decodes it and compares it as `CAST(priority AS TEXT)` instead.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Legacy priority value. Never written by the migrations.
    pub priority: String,
    /// Reference to `priorities.id`, added and backfilled by the migrations.
    pub priority_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::priority::Entity",
        from = "Column::PriorityId",
        to = "super::priority::Column::Id"
    )]
    Priority,
}

impl Related<super::priority::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Priority.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
