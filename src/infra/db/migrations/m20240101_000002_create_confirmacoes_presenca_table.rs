//! Migration: Create the RSVP confirmations table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfirmacoesPresenca::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConfirmacoesPresenca::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ConfirmacoesPresenca::Nome).string().not_null())
                    .col(
                        ColumnDef::new(ConfirmacoesPresenca::LevarAcompanhante)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ConfirmacoesPresenca::Acompanhantes).json().null())
                    .col(
                        ColumnDef::new(ConfirmacoesPresenca::TemRestricao)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ConfirmacoesPresenca::Restricao).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfirmacoesPresenca::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConfirmacoesPresenca {
    Table,
    Id,
    Nome,
    LevarAcompanhante,
    Acompanhantes,
    TemRestricao,
    Restricao,
}
