//! RSVP confirmation database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "confirmacoes_presenca")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    #[sea_orm(column_name = "levar_acompanhante")]
    pub bringing_companion: bool,
    /// Serialized companion list
    #[sea_orm(column_name = "acompanhantes")]
    pub companions: Option<Json>,
    #[sea_orm(column_name = "tem_restricao")]
    pub has_restriction: bool,
    #[sea_orm(column_name = "restricao")]
    pub restriction: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
