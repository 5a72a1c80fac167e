//! RSVP handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{not_blank, null_as_empty, ValidatedJson};
use crate::api::AppState;
use crate::config::MSG_RSVP_OK;
use crate::domain::Rsvp;
use crate::errors::AppResult;
use crate::types::{InsertedResponse, Message};

/// Attendance confirmation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPresenceRequest {
    /// Guest name
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "O nome é obrigatório."))]
    #[schema(example = "Bia")]
    pub nome: String,
    /// Whether the guest brings company
    #[serde(default)]
    pub levar_acompanhante: bool,
    /// Companion details, stored as JSON
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub acompanhantes: Option<serde_json::Value>,
    /// Whether the guest has a dietary restriction
    #[serde(default)]
    pub tem_restricao: bool,
    /// Restriction description
    #[serde(default)]
    #[schema(example = "Vegetariana")]
    pub restricao: Option<String>,
}

impl From<ConfirmPresenceRequest> for Rsvp {
    fn from(req: ConfirmPresenceRequest) -> Self {
        Rsvp {
            name: req.nome,
            bringing_companion: req.levar_acompanhante,
            companions: req.acompanhantes,
            has_restriction: req.tem_restricao,
            restriction: req.restricao,
        }
    }
}

pub fn guest_routes() -> Router<AppState> {
    Router::new().route("/confirmar-presenca", post(confirm_presence))
}

/// Confirm attendance
#[utoipa::path(
    post,
    path = "/confirmar-presenca",
    tag = "Guests",
    request_body = ConfirmPresenceRequest,
    responses(
        (status = 200, description = "Confirmation saved", body = InsertedResponse),
        (status = 400, description = "Missing guest name", body = Message),
        (status = 500, description = "Store rejected the write", body = Message)
    )
)]
pub async fn confirm_presence(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ConfirmPresenceRequest>,
) -> AppResult<Json<InsertedResponse>> {
    let id = state.guest_service.confirm(Rsvp::from(payload)).await?;
    Ok(Json(InsertedResponse::new(MSG_RSVP_OK, id)))
}
