//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names match the existing schema.

pub mod gift;
pub mod rsvp;
pub mod user;
