use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response, also the body of every error
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    #[schema(example = "Erro interno do servidor")]
    pub mensagem: String,
}

impl Message {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Acknowledgement for an inserted row
#[derive(Debug, Serialize, ToSchema)]
pub struct InsertedResponse {
    /// Confirmation message
    #[schema(example = "Presente cadastrado com sucesso!")]
    pub mensagem: String,
    /// Identifier assigned by the database
    #[schema(example = 1)]
    pub id: i32,
}

impl InsertedResponse {
    pub fn new(mensagem: impl Into<String>, id: i32) -> Self {
        Self {
            mensagem: mensagem.into(),
            id,
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
