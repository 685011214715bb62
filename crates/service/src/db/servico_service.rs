use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use models::{cliente, prestador, servico, validation};
use crate::errors::ServiceError;
use crate::views::{servico_view, Projection, ServicoView};

/// Load both ends of a servico and build its full projection.
async fn full_view<C: ConnectionTrait>(db: &C, s: &servico::Model) -> Result<ServicoView, ServiceError> {
    let prestador = s.find_related(prestador::Entity).one(db).await?;
    let cliente = s.find_related(cliente::Entity).one(db).await?;
    Ok(servico_view(s, prestador.as_ref(), cliente.as_ref(), Projection::Full))
}

async fn find_prestador<C: ConnectionTrait>(db: &C, id: i32) -> Result<prestador::Model, ServiceError> {
    prestador::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("prestador"))
}

async fn find_cliente<C: ConnectionTrait>(db: &C, id: i32) -> Result<cliente::Model, ServiceError> {
    cliente::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("cliente"))
}

/// List every servico with its prestador and cliente.
pub async fn list_servicos(db: &DatabaseConnection) -> Result<Vec<ServicoView>, ServiceError> {
    let rows = servico::Entity::find().order_by_asc(servico::Column::Id).all(db).await?;
    let prestadores = rows.load_one(prestador::Entity, db).await?;
    let clientes = rows.load_one(cliente::Entity, db).await?;
    Ok(rows
        .iter()
        .zip(prestadores.iter().zip(clientes.iter()))
        .map(|(s, (p, c))| servico_view(s, p.as_ref(), c.as_ref(), Projection::Full))
        .collect())
}

pub async fn get_servico(db: &DatabaseConnection, id: i32) -> Result<ServicoView, ServiceError> {
    let found = servico::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("servico"))?;
    full_view(db, &found).await
}

/// Create a servico after checking that both references exist.
///
/// The lookups and the insert share one transaction.
#[instrument(skip(db))]
pub async fn create_servico(
    db: &DatabaseConnection,
    nome: Option<&str>,
    categoria_servico: Option<&str>,
    prestador_id: Option<i32>,
    cliente_id: Option<i32>,
) -> Result<ServicoView, ServiceError> {
    let nome = validation::required_text("nome", nome)?;
    let categoria_servico = validation::required_text("categoriaServico", categoria_servico)?;
    let prestador_id = validation::required_id("prestadorId", prestador_id)?;
    let cliente_id = validation::required_id("clienteId", cliente_id)?;

    let txn = db.begin().await?;
    let prestador = find_prestador(&txn, prestador_id).await?;
    let cliente = find_cliente(&txn, cliente_id).await?;
    let created = servico::create(&txn, nome, categoria_servico, prestador.id, cliente.id).await?;
    txn.commit().await?;

    Ok(servico_view(&created, Some(&prestador), Some(&cliente), Projection::Full))
}

/// Partial update. A new prestador/cliente is looked up only when it differs
/// from the current one; otherwise the existing relation is kept.
#[instrument(skip(db))]
pub async fn update_servico(
    db: &DatabaseConnection,
    id: i32,
    nome: Option<&str>,
    categoria_servico: Option<&str>,
    prestador_id: Option<i32>,
    cliente_id: Option<i32>,
) -> Result<ServicoView, ServiceError> {
    let nome = validation::optional_text("nome", nome)?;
    let categoria_servico = validation::optional_text("categoriaServico", categoria_servico)?;

    let txn = db.begin().await?;
    let existing = servico::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("servico"))?;

    let prestador = match prestador_id.filter(|&pid| pid != 0 && pid != existing.prestador_id) {
        Some(pid) => find_prestador(&txn, pid).await?,
        None => find_prestador(&txn, existing.prestador_id).await?,
    };
    let cliente = match cliente_id.filter(|&cid| cid != 0 && cid != existing.cliente_id) {
        Some(cid) => find_cliente(&txn, cid).await?,
        None => find_cliente(&txn, existing.cliente_id).await?,
    };

    let mut am: servico::ActiveModel = existing.clone().into();
    if let Some(n) = nome { am.nome = Set(n.to_string()); }
    if let Some(c) = categoria_servico { am.categoria_servico = Set(c.to_string()); }
    if prestador.id != existing.prestador_id { am.prestador_id = Set(prestador.id); }
    if cliente.id != existing.cliente_id { am.cliente_id = Set(cliente.id); }

    let updated = if am.is_changed() { am.update(&txn).await? } else { existing };
    txn.commit().await?;

    Ok(servico_view(&updated, Some(&prestador), Some(&cliente), Projection::Full))
}

/// Delete and return the removed servico with its relations.
#[instrument(skip(db))]
pub async fn delete_servico(db: &DatabaseConnection, id: i32) -> Result<ServicoView, ServiceError> {
    let txn = db.begin().await?;
    let existing = servico::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("servico"))?;
    let view = full_view(&txn, &existing).await?;
    let res = servico::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(rows = res.rows_affected, "servico removed");
    Ok(view)
}
