//! Migration: Create the gift registry table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presentes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Presentes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Presentes::Nome).string().not_null())
                    .col(ColumnDef::new(Presentes::Imagem).text().null())
                    .col(ColumnDef::new(Presentes::Link).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presentes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Presentes {
    Table,
    Id,
    Nome,
    Imagem,
    Link,
}
