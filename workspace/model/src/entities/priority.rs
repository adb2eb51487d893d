use sea_orm::entity::prelude::*;

/// A priority definition from the `priorities` reference table.
/// Rows are joined on `code`, which matches the legacy ticket priority values.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "priorities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    /// Display name shown to users.
    pub label: String,
    pub color_hex: Option<String>,
    /// Background color, either a hex value or an `rgba(...)` expression.
    pub background_hex: Option<String>,
    /// Sort key, ascending.
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
