//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod gift_service;
mod guest_service;
mod token;

pub use container::Services;

pub use auth_service::{AuthService, Authenticator, Session};
pub use gift_service::{GiftManager, GiftService};
pub use guest_service::{GuestManager, GuestService};
pub use token::{Claims, TokenIssuer};
