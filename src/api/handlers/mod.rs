//! HTTP request handlers.

pub mod auth_handler;
pub mod gift_handler;
pub mod guest_handler;

pub use auth_handler::auth_routes;
pub use gift_handler::gift_routes;
pub use guest_handler::guest_routes;
