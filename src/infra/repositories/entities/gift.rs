//! Gift database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Gift;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "presentes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    #[sea_orm(column_name = "imagem")]
    pub image: Option<String>,
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Gift {
    fn from(model: Model) -> Self {
        Gift {
            id: model.id,
            name: model.name,
            image: model.image,
            link: model.link,
        }
    }
}
