//! Decisions taken by the migrations, separated from the queries that feed
//! them so they can be checked without a database.

/// Whether a table or column was found in the database catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Present,
}

impl From<bool> for Presence {
    fn from(exists: bool) -> Self {
        if exists {
            Presence::Present
        } else {
            Presence::Absent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Create,
    Keep,
}

impl TableAction {
    pub fn for_presence(presence: Presence) -> Self {
        match presence {
            Presence::Absent => TableAction::Create,
            Presence::Present => TableAction::Keep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAction {
    Add,
    Keep,
}

impl ColumnAction {
    pub fn for_presence(presence: Presence) -> Self {
        match presence {
            Presence::Absent => ColumnAction::Add,
            Presence::Present => ColumnAction::Keep,
        }
    }
}

/// Seeding only happens on an empty table. Any existing row suppresses it,
/// whatever codes those rows carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedAction {
    Insert,
    Skip { existing: u64 },
}

impl SeedAction {
    pub fn for_row_count(count: u64) -> Self {
        if count == 0 {
            SeedAction::Insert
        } else {
            SeedAction::Skip { existing: count }
        }
    }
}

/// Result of the post-backfill check on `tickets.priority_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Complete,
    /// Tickets whose legacy priority matched no reference code.
    Unresolved { tickets: u64 },
}

impl AuditOutcome {
    pub fn from_null_count(count: u64) -> Self {
        if count == 0 {
            AuditOutcome::Complete
        } else {
            AuditOutcome::Unresolved { tickets: count }
        }
    }
}

/// Returns the reference codes from `expected` that are not in `present`,
/// in the order of `expected`.
pub fn missing_codes<'a, S: AsRef<str>>(expected: &[&'a str], present: &[S]) -> Vec<&'a str> {
    expected
        .iter()
        .copied()
        .filter(|code| !present.iter().any(|p| p.as_ref() == *code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_from_catalog_flag() {
        assert_eq!(Presence::from(true), Presence::Present);
        assert_eq!(Presence::from(false), Presence::Absent);
    }

    #[test]
    fn test_table_and_column_actions() {
        assert_eq!(TableAction::for_presence(Presence::Absent), TableAction::Create);
        assert_eq!(TableAction::for_presence(Presence::Present), TableAction::Keep);
        assert_eq!(ColumnAction::for_presence(Presence::Absent), ColumnAction::Add);
        assert_eq!(ColumnAction::for_presence(Presence::Present), ColumnAction::Keep);
    }

    #[test]
    fn test_seed_only_when_empty() {
        assert_eq!(SeedAction::for_row_count(0), SeedAction::Insert);
        assert_eq!(SeedAction::for_row_count(1), SeedAction::Skip { existing: 1 });
        assert_eq!(SeedAction::for_row_count(4), SeedAction::Skip { existing: 4 });
    }

    #[test]
    fn test_audit_outcome() {
        assert_eq!(AuditOutcome::from_null_count(0), AuditOutcome::Complete);
        assert_eq!(
            AuditOutcome::from_null_count(3),
            AuditOutcome::Unresolved { tickets: 3 }
        );
    }

    #[test]
    fn test_missing_codes_keeps_expected_order() {
        let expected = ["critique", "haute", "moyenne", "faible"];

        let present = vec!["faible".to_string(), "urgent".to_string(), "critique".to_string()];
        assert_eq!(missing_codes(&expected, &present), vec!["haute", "moyenne"]);

        let all: Vec<String> = expected.iter().map(|c| c.to_string()).collect();
        assert!(missing_codes(&expected, &all).is_empty());

        let none: Vec<String> = Vec::new();
        assert_eq!(missing_codes(&expected, &none), expected.to_vec());
    }
}
