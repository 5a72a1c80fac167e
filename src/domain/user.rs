//! User domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

/// Database-assigned user identifier
pub type UserId = i32;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Data needed to insert a user. The hash is already computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User response (safe to return to client). Has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: UserId,
    /// User display name
    #[schema(example = "Ana")]
    pub nome: String,
    /// User email address
    #[schema(example = "ana@x.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
        }
    }
}
