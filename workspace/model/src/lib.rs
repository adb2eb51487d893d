pub mod entities;

#[cfg(test)]
mod test {
    use sea_orm::sea_query::SqliteQueryBuilder;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend,
        DbErr, EntityTrait, ModelTrait, QueryFilter, Schema, Set, Statement,
    };

    use super::entities::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        let schema = Schema::new(DbBackend::Sqlite);
        for stmt in [
            schema.create_table_from_entity(Priority),
            schema.create_table_from_entity(Ticket),
        ] {
            db.execute(Statement::from_string(
                DbBackend::Sqlite,
                stmt.to_string(SqliteQueryBuilder),
            ))
            .await?;
        }
        Ok(db)
    }

    #[tokio::test]
    async fn test_ticket_priority_relation() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let haute = priority::ActiveModel {
            code: Set("haute".to_string()),
            label: Set("Haute".to_string()),
            color_hex: Set(Some("#F59E0B".to_string())),
            background_hex: Set(Some("rgba(245, 158, 11, 0.1)".to_string())),
            display_order: Set(Some(2)),
            is_active: Set(Some(true)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        ticket::ActiveModel {
            priority: Set("haute".to_string()),
            priority_id: Set(Some(haute.id)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        ticket::ActiveModel {
            priority: Set("inconnue".to_string()),
            priority_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let linked = Ticket::find()
            .find_also_related(Priority)
            .filter(ticket::Column::PriorityId.is_not_null())
            .all(&db)
            .await?;
        assert_eq!(linked.len(), 1);
        let (ticket, priority) = &linked[0];
        assert_eq!(ticket.priority, "haute");
        assert_eq!(priority.as_ref().map(|p| p.code.as_str()), Some("haute"));

        let tickets_of_haute = haute.find_related(Ticket).all(&db).await?;
        assert_eq!(tickets_of_haute.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_priority_code_is_unique() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let row = || priority::ActiveModel {
            code: Set("critique".to_string()),
            label: Set("Critique".to_string()),
            ..Default::default()
        };

        row().insert(&db).await?;
        assert!(row().insert(&db).await.is_err());

        Ok(())
    }
}
