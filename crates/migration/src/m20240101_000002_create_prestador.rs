//! Create `prestador` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prestador::Table)
                    .if_not_exists()
                    .col(pk_auto(Prestador::Id))
                    .col(string_len(Prestador::Nome, 128).not_null())
                    .col(string_len(Prestador::Sobrenome, 128).not_null())
                    .col(string_len(Prestador::TimeDoCoracao, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Prestador::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Prestador { Table, Id, Nome, Sobrenome, TimeDoCoracao }
