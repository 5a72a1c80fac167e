//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool and migrations
//! - Repositories over the credential, RSVP, and gift tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    GiftRepository, GiftStore, GuestRepository, GuestStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockGiftRepository, MockGuestRepository, MockUserRepository};
