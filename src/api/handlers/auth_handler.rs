//! Authentication handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{not_blank, null_as_empty, ValidatedJson};
use crate::api::AppState;
use crate::config::{MSG_LOGIN_OK, MSG_REGISTER_OK};
use crate::domain::{UserId, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, Message};

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Nome, email e senha são obrigatórios."))]
    #[schema(example = "Ana")]
    pub nome: String,
    /// User email address
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Nome, email e senha são obrigatórios."))]
    #[schema(example = "ana@x.com")]
    pub email: String,
    /// Plaintext password (surrounding whitespace is ignored)
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Nome, email e senha são obrigatórios."))]
    #[schema(example = "secret1")]
    pub senha: String,
}

/// Registration acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "Usuário cadastrado com sucesso!")]
    pub mensagem: String,
    #[serde(rename = "usuarioId")]
    #[schema(example = 1)]
    pub usuario_id: UserId,
}

/// User login request. Missing fields simply fail authentication.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "ana@x.com")]
    pub email: String,
    /// User password
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "secret1")]
    pub senha: String,
}

/// Successful login: user without password, plus bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login bem-sucedido")]
    pub mensagem: String,
    pub user: UserResponse,
    /// Signed session token, valid for one hour
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Missing name, email or password", body = Message),
        (status = 500, description = "Store rejected the write", body = Message)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<RegisterResponse>> {
    let usuario_id = state
        .auth_service
        .register(payload.nome, payload.email, payload.senha)
        .await?;

    Ok(Created(RegisterResponse {
        mensagem: MSG_REGISTER_OK.to_string(),
        usuario_id,
    }))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password", body = Message),
        (status = 500, description = "Store unavailable", body = Message)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    // An unreadable body is just another failed login
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Unreadable login body: {}", e.body_text());
        AppError::InvalidCredentials
    })?;

    let session = state
        .auth_service
        .login(payload.email, payload.senha)
        .await?;

    Ok(Json(LoginResponse {
        mensagem: MSG_LOGIN_OK.to_string(),
        user: session.user,
        token: session.token,
    }))
}
