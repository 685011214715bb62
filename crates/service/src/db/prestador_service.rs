use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, TransactionTrait};
use tracing::instrument;

use models::{prestador, servico};
use crate::errors::ServiceError;
use crate::views::{pessoa_view, PessoaView, Projection};

/// List every prestador with the servicos it performs.
pub async fn list_prestadores(db: &DatabaseConnection) -> Result<Vec<PessoaView>, ServiceError> {
    let rows = prestador::Entity::find().order_by_asc(prestador::Column::Id).all(db).await?;
    let servicos = rows
        .load_many(servico::Entity::find().order_by_asc(servico::Column::Id), db)
        .await?;
    Ok(rows
        .iter()
        .zip(servicos.iter())
        .map(|(c, s)| pessoa_view(c, Projection::Full).with_servicos(s))
        .collect())
}

/// Get a prestador by id; `None` when absent.
pub async fn get_prestador(db: &DatabaseConnection, id: i32) -> Result<Option<PessoaView>, ServiceError> {
    let found = prestador::Entity::find_by_id(id).one(db).await?;
    Ok(found.map(|c| pessoa_view(&c, Projection::Full)))
}

#[instrument(skip(db))]
pub async fn create_prestador(
    db: &DatabaseConnection,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<PessoaView, ServiceError> {
    let created = prestador::create(db, nome, sobrenome, time_do_coracao).await?;
    Ok(pessoa_view(&created, Projection::Full))
}

/// Partial update; a missing prestador is a database error.
#[instrument(skip(db))]
pub async fn update_prestador(
    db: &DatabaseConnection,
    id: i32,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<PessoaView, ServiceError> {
    let updated = prestador::update(db, id, nome, sobrenome, time_do_coracao).await?;
    Ok(pessoa_view(&updated, Projection::Full))
}

/// Delete and return the removed prestador.
#[instrument(skip(db))]
pub async fn delete_prestador(db: &DatabaseConnection, id: i32) -> Result<PessoaView, ServiceError> {
    let txn = db.begin().await?;
    let deleted = prestador::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(pessoa_view(&deleted, Projection::Full))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn prestador_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_prestador(&db, Some("Caio"), Some("Lima"), Some("Vasco")).await?;
        let PessoaView::Full(full) = &created else { panic!("expected full projection") };
        let id = full.id;

        let listed = list_prestadores(&db).await?;
        assert_eq!(listed.len(), 1);
        let json = serde_json::to_value(&listed[0])?;
        assert_eq!(json["servicos"], serde_json::json!([]));
        assert_eq!(json["sobrenome"], "Lima");

        // no fields: the row comes back unchanged
        let same = update_prestador(&db, id, None, None, None).await?;
        assert_eq!(same, created);

        let renamed = update_prestador(&db, id, Some("Duda"), Some("Reis"), None).await?;
        let PessoaView::Full(renamed) = renamed else { panic!("expected full projection") };
        assert_eq!((renamed.nome.as_str(), renamed.sobrenome.as_str()), ("Duda", "Reis"));

        delete_prestador(&db, id).await?;
        assert_eq!(get_prestador(&db, id).await?, None);
        assert!(matches!(delete_prestador(&db, id).await, Err(ServiceError::Db(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_empty_surname_but_keeps_whitespace() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_prestador(&db, Some("Caio"), Some(""), Some("Vasco")).await.unwrap_err();
        assert_eq!(err.to_string(), "field \"sobrenome\" is required");
        assert!(list_prestadores(&db).await?.is_empty());

        let created = create_prestador(&db, Some("Caio"), Some("  "), Some("Vasco")).await?;
        let PessoaView::Full(full) = created else { panic!("expected full projection") };
        assert_eq!(full.sobrenome, "  ");
        assert_eq!(list_prestadores(&db).await?.len(), 1);
        Ok(())
    }
}
