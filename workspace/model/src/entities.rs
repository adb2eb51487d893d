//! SeaORM entities for the two tables touched by the priority migrations.
//! `priorities` is created by this tool, `tickets` belongs to the ticketing
//! application and is only partially mapped.

pub mod priority;
pub mod ticket;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::priority::Entity as Priority;
    pub use super::ticket::Entity as Ticket;
}
