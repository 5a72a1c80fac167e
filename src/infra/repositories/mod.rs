//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Every operation is a single statement.

pub(crate) mod entities;
mod gift_repository;
mod guest_repository;
mod user_repository;

pub use gift_repository::{GiftRepository, GiftStore};
pub use guest_repository::{GuestRepository, GuestStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use gift_repository::MockGiftRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use guest_repository::MockGuestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
