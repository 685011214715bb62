use anyhow::Result;
use sea_orm::EntityTrait;

use crate::db::connect_ephemeral;
use crate::errors::ModelError;
use crate::{cliente, prestador, servico};

#[tokio::test]
async fn cliente_create_update_delete() -> Result<()> {
    let db = connect_ephemeral().await?;

    let c = cliente::create(&db, Some("Ana"), Some("Oliveira"), Some("Flamengo")).await?;
    assert!(c.id > 0);
    assert_eq!(c.time_do_coracao, "Flamengo");

    let updated = cliente::update(&db, c.id, None, Some("Souza"), None).await?;
    assert_eq!(updated.nome, "Ana");
    assert_eq!(updated.sobrenome, "Souza");
    assert_eq!(updated.time_do_coracao, "Flamengo");

    let deleted = cliente::delete(&db, c.id).await?;
    assert_eq!(deleted, updated);
    assert!(cliente::Entity::find_by_id(c.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn create_reports_first_missing_field() -> Result<()> {
    let db = connect_ephemeral().await?;

    let err = prestador::create(&db, Some("Caio"), None, None).await.unwrap_err();
    match err {
        ModelError::Validation(msg) => assert_eq!(msg, "field \"sobrenome\" is required"),
        other => panic!("unexpected error: {other}"),
    }
    let err = prestador::create(&db, Some("Caio"), Some("Lima"), Some("")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(ref m) if m.contains("timeDoCoracao")));

    assert!(prestador::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_rows_surface_as_db_errors() -> Result<()> {
    let db = connect_ephemeral().await?;

    let err = cliente::update(&db, 999, Some("X"), None, None).await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));

    let err = prestador::delete(&db, 999).await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));
    Ok(())
}

#[tokio::test]
async fn servico_create_stamps_registration_time() -> Result<()> {
    let db = connect_ephemeral().await?;
    let c = cliente::create(&db, Some("Ana"), Some("Oliveira"), Some("Flamengo")).await?;
    let p = prestador::create(&db, Some("Caio"), Some("Lima"), Some("Vasco")).await?;

    let before = chrono::Utc::now() - chrono::Duration::seconds(5);
    let s = servico::create(&db, "Reparo", "Elétrica", p.id, c.id).await?;
    assert_eq!(s.prestador_id, p.id);
    assert_eq!(s.cliente_id, c.id);
    assert!(s.data_cadastro.with_timezone(&chrono::Utc) >= before);

    let err = servico::create(&db, "", "Elétrica", p.id, c.id).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}
