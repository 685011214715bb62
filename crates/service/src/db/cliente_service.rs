use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, TransactionTrait};
use tracing::instrument;

use models::{cliente, servico};
use crate::errors::ServiceError;
use crate::views::{pessoa_view, PessoaView, Projection};

/// List every cliente with the servicos it requested.
pub async fn list_clientes(db: &DatabaseConnection) -> Result<Vec<PessoaView>, ServiceError> {
    let rows = cliente::Entity::find().order_by_asc(cliente::Column::Id).all(db).await?;
    let servicos = rows
        .load_many(servico::Entity::find().order_by_asc(servico::Column::Id), db)
        .await?;
    Ok(rows
        .iter()
        .zip(servicos.iter())
        .map(|(c, s)| pessoa_view(c, Projection::Full).with_servicos(s))
        .collect())
}

/// Get a cliente by id; `None` when absent.
pub async fn get_cliente(db: &DatabaseConnection, id: i32) -> Result<Option<PessoaView>, ServiceError> {
    let found = cliente::Entity::find_by_id(id).one(db).await?;
    Ok(found.map(|c| pessoa_view(&c, Projection::Full)))
}

#[instrument(skip(db))]
pub async fn create_cliente(
    db: &DatabaseConnection,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<PessoaView, ServiceError> {
    let created = cliente::create(db, nome, sobrenome, time_do_coracao).await?;
    Ok(pessoa_view(&created, Projection::Full))
}

/// Partial update; a missing cliente is a database error.
#[instrument(skip(db))]
pub async fn update_cliente(
    db: &DatabaseConnection,
    id: i32,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<PessoaView, ServiceError> {
    let updated = cliente::update(db, id, nome, sobrenome, time_do_coracao).await?;
    Ok(pessoa_view(&updated, Projection::Full))
}

/// Delete and return the removed cliente.
#[instrument(skip(db))]
pub async fn delete_cliente(db: &DatabaseConnection, id: i32) -> Result<PessoaView, ServiceError> {
    let txn = db.begin().await?;
    let deleted = cliente::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(pessoa_view(&deleted, Projection::Full))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    #[tokio::test]
    async fn cliente_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_cliente(&db, Some("Ana"), Some("Oliveira"), Some("Flamengo")).await?;
        let id = created.id();
        assert_eq!(
            serde_json::to_value(&created)?,
            json!({"id": id, "nome": "Ana", "sobrenome": "Oliveira", "timeDoCoracao": "Flamengo"})
        );

        let found = get_cliente(&db, id).await?;
        assert_eq!(found, Some(created.clone()));

        let updated = update_cliente(&db, id, None, None, Some("Fluminense")).await?;
        assert_eq!(serde_json::to_value(&updated)?["timeDoCoracao"], "Fluminense");
        assert_eq!(serde_json::to_value(&updated)?["nome"], "Ana");

        let deleted = delete_cliente(&db, id).await?;
        assert_eq!(deleted, updated);
        assert!(get_cliente(&db, id).await?.is_none());

        // second delete hits a missing row
        let err = delete_cliente(&db, id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_every_field() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = create_cliente(&db, None, Some("Oliveira"), Some("Flamengo")).await.unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert_eq!(msg, "field \"nome\" is required"),
            other => panic!("unexpected: {other:?}"),
        }
        let err = create_cliente(&db, Some("Ana"), Some("Oliveira"), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("timeDoCoracao")));
        assert!(list_clientes(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_blank_and_missing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_cliente(&db, Some("Ana"), Some("Oliveira"), Some("Flamengo")).await?;
        let id = created.id();

        let err = update_cliente(&db, id, Some(""), None, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = update_cliente(&db, id + 100, Some("Bia"), None, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));

        let err = update_cliente(&db, id + 100, None, None, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }

    #[tokio::test]
    async fn whitespace_counts_as_a_value() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_cliente(&db, Some("Ana"), Some(" "), Some("Flamengo")).await?;
        assert_eq!(serde_json::to_value(&created)?["sobrenome"], " ");

        let updated = update_cliente(&db, created.id(), None, None, Some("  ")).await?;
        assert_eq!(serde_json::to_value(&updated)?["timeDoCoracao"], "  ");
        Ok(())
    }
}
