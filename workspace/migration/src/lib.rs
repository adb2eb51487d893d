//! Idempotent migrations introducing the `priorities` reference table and
//! the `tickets.priority_id` foreign key.
//!
//! Run [`create_priorities_table`] first, then [`migrate_priority_id`].
//! Both only add structures and rows; the legacy `tickets.priority` column
//! is never modified.

pub mod error;
pub mod plan;
pub mod priorities;
pub mod status;
mod step;
pub mod ticket_priority;

pub use error::{MigrationError, Result};
pub use priorities::{create_priorities_table, InitReport, CANONICAL_PRIORITIES};
pub use status::{inspect, StatusReport};
pub use ticket_priority::{migrate_priority_id, BackfillReport};
