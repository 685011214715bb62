//! Create `servico` table.
//! Links one prestador to one cliente. Referenced rows cannot be deleted
//! while a servico still points at them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servico::Table)
                    .if_not_exists()
                    .col(pk_auto(Servico::Id))
                    .col(string_len(Servico::Nome, 256).not_null())
                    .col(string_len(Servico::CategoriaServico, 128).not_null())
                    .col(timestamp_with_time_zone(Servico::DataCadastro).not_null())
                    .col(integer(Servico::PrestadorId).not_null())
                    .col(integer(Servico::ClienteId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servico_prestador")
                            .from(Servico::Table, Servico::PrestadorId)
                            .to(Prestador::Table, Prestador::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servico_cliente")
                            .from(Servico::Table, Servico::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Servico::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Servico {
    Table,
    Id,
    Nome,
    CategoriaServico,
    DataCadastro,
    PrestadorId,
    ClienteId,
}

#[derive(DeriveIden)]
enum Prestador { Table, Id }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
