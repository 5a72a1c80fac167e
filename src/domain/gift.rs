//! Gift registry entity.

use serde::Serialize;
use utoipa::ToSchema;

/// Gift as listed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Gift {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nomePresente")]
    #[schema(example = "Jogo de panelas")]
    pub name: String,
    #[serde(rename = "imagemPresente")]
    #[schema(example = "https://example.com/panelas.jpg")]
    pub image: Option<String>,
    #[serde(rename = "linkPresente")]
    #[schema(example = "https://loja.example.com/panelas")]
    pub link: String,
}

/// Data needed to insert a gift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGift {
    pub name: String,
    pub image: Option<String>,
    pub link: String,
}
