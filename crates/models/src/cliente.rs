use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, servico, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub sobrenome: String,
    pub time_do_coracao: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Servico,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Servico => Entity::has_many(servico::Entity).into() }
    }
}

impl Related<servico::Entity> for Entity {
    fn to() -> RelationDef { Relation::Servico.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let nome = validation::required_text("nome", nome)?;
    let sobrenome = validation::required_text("sobrenome", sobrenome)?;
    let time_do_coracao = validation::required_text("timeDoCoracao", time_do_coracao)?;
    let am = ActiveModel {
        nome: Set(nome.to_string()),
        sobrenome: Set(sobrenome.to_string()),
        time_do_coracao: Set(time_do_coracao.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrites only the provided fields. A missing row is reported by the ORM.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    nome: Option<&str>,
    sobrenome: Option<&str>,
    time_do_coracao: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let mut am = ActiveModel { id: Unchanged(id), ..Default::default() };
    if let Some(v) = validation::optional_text("nome", nome)? { am.nome = Set(v.to_string()); }
    if let Some(v) = validation::optional_text("sobrenome", sobrenome)? { am.sobrenome = Set(v.to_string()); }
    if let Some(v) = validation::optional_text("timeDoCoracao", time_do_coracao)? { am.time_do_coracao = Set(v.to_string()); }
    if !am.is_changed() {
        return Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("cliente {id} does not exist")).into());
    }
    Ok(am.update(db).await?)
}

/// Deletes and returns the row. Run it inside a transaction.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<Model, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("cliente {id} does not exist")))?;
    Entity::delete_by_id(id).exec(db).await?;
    Ok(found)
}
