//! Gift registry handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{not_blank, null_as_empty, ValidatedJson};
use crate::api::AppState;
use crate::config::MSG_GIFT_OK;
use crate::domain::{Gift, NewGift};
use crate::errors::AppResult;
use crate::types::{Created, InsertedResponse, Message};

/// Gift creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftRequest {
    /// Gift name
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Nome e link são obrigatórios."))]
    #[schema(example = "Jogo de panelas")]
    pub nome_presente: String,
    /// Image URL
    #[serde(default)]
    #[schema(example = "https://example.com/panelas.jpg")]
    pub imagem_presente: Option<String>,
    /// Where to buy it
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Nome e link são obrigatórios."))]
    #[schema(example = "https://loja.example.com/panelas")]
    pub link_presente: String,
}

pub fn gift_routes() -> Router<AppState> {
    Router::new().route("/presentes", get(list_gifts).post(create_gift))
}

/// Add a gift to the registry
#[utoipa::path(
    post,
    path = "/presentes",
    tag = "Gifts",
    request_body = CreateGiftRequest,
    responses(
        (status = 201, description = "Gift created", body = InsertedResponse),
        (status = 400, description = "Missing name or link", body = Message),
        (status = 500, description = "Store rejected the write", body = Message)
    )
)]
pub async fn create_gift(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGiftRequest>,
) -> AppResult<Created<InsertedResponse>> {
    let id = state
        .gift_service
        .create(NewGift {
            name: payload.nome_presente,
            image: payload.imagem_presente,
            link: payload.link_presente,
        })
        .await?;

    Ok(Created(InsertedResponse::new(MSG_GIFT_OK, id)))
}

/// List the registry
#[utoipa::path(
    get,
    path = "/presentes",
    tag = "Gifts",
    responses(
        (status = 200, description = "All gifts", body = [Gift]),
        (status = 500, description = "Store unavailable", body = Message)
    )
)]
pub async fn list_gifts(State(state): State<AppState>) -> AppResult<Json<Vec<Gift>>> {
    Ok(Json(state.gift_service.list().await?))
}
