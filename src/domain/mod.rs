//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod gift;
pub mod guest;
pub mod password;
pub mod user;

pub use gift::{Gift, NewGift};
pub use guest::Rsvp;
pub use password::{Password, PasswordHasher};
pub use user::{NewUser, User, UserId, UserResponse};
