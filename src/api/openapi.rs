//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, gift_handler, guest_handler};
use crate::domain::{Gift, UserResponse};
use crate::types::{InsertedResponse, Message};

/// OpenAPI documentation for the wedding API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wedding API",
        version = "0.1.0",
        description = "Guest RSVPs, gift registry and user authentication for the wedding site",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        guest_handler::confirm_presence,
        gift_handler::create_gift,
        gift_handler::list_gifts,
    ),
    components(
        schemas(
            UserResponse,
            Gift,
            Message,
            InsertedResponse,
            auth_handler::RegisterRequest,
            auth_handler::RegisterResponse,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            guest_handler::ConfirmPresenceRequest,
            gift_handler::CreateGiftRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Guests", description = "Attendance confirmations"),
        (name = "Gifts", description = "Gift registry")
    )
)]
pub struct ApiDoc;
