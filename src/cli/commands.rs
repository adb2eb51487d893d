pub mod create_priorities;
pub mod migrate_all;
pub mod migrate_priority_id;
pub mod status;

pub use create_priorities::create_priorities;
pub use migrate_all::migrate_all;
pub use migrate_priority_id::migrate_priority_id;
pub use status::status;

use migration::MigrationError;
use tracing::error;

/// What a command was doing when it failed, for the operator diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activity {
    Migration,
    Inspection,
}

pub(crate) fn failure_line(activity: Activity, e: &MigrationError) -> String {
    match activity {
        Activity::Migration => format!("ERREUR lors de la migration: {}", e),
        Activity::Inspection => format!("ERREUR lors de l'inspection de la base: {}", e),
    }
}

fn report_failure(activity: Activity, e: MigrationError) -> anyhow::Error {
    error!(?activity, "Command failed: {}", e);
    println!("{}", failure_line(activity, &e));
    e.into()
}

/// Prints the operator-facing failure line and turns the error into the
/// command's result. Covers connection failures as well as failed steps,
/// which have already been rolled back.
pub(crate) fn migration_failed(e: MigrationError) -> anyhow::Error {
    report_failure(Activity::Migration, e)
}

/// Same as [`migration_failed`] for the read-only `status` command.
pub(crate) fn inspection_failed(e: MigrationError) -> anyhow::Error {
    report_failure(Activity::Inspection, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_lines() {
        let e = MigrationError::MissingTable("priorities");
        assert_eq!(
            failure_line(Activity::Migration, &e),
            "ERREUR lors de la migration: La table 'priorities' n'existe pas"
        );

        let line = failure_line(Activity::Inspection, &e);
        assert!(line.starts_with("ERREUR lors de l'inspection de la base:"));
        assert!(!line.contains("migration"));
    }

    #[test]
    fn test_failure_keeps_error_type() {
        let err = migration_failed(MigrationError::MissingTable("tickets"));
        assert!(matches!(
            err.downcast::<MigrationError>(),
            Ok(MigrationError::MissingTable("tickets"))
        ));
    }
}
