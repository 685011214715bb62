use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Servico: lookups by owning prestador
        manager
            .create_index(
                Index::create()
                    .name("idx_servico_prestador")
                    .table(Servico::Table)
                    .col(Servico::PrestadorId)
                    .to_owned(),
            )
            .await?;

        // Servico: lookups by owning cliente
        manager
            .create_index(
                Index::create()
                    .name("idx_servico_cliente")
                    .table(Servico::Table)
                    .col(Servico::ClienteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_servico_prestador").table(Servico::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_servico_cliente").table(Servico::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Servico { Table, PrestadorId, ClienteId }
