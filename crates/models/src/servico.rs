use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{cliente, errors, prestador, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servico")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub categoria_servico: String,
    pub data_cadastro: DateTimeWithTimeZone,
    pub prestador_id: i32,
    pub cliente_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Prestador,
    Cliente,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Prestador => Entity::belongs_to(prestador::Entity)
                .from(Column::PrestadorId)
                .to(prestador::Column::Id)
                .into(),
            Relation::Cliente => Entity::belongs_to(cliente::Entity)
                .from(Column::ClienteId)
                .to(cliente::Column::Id)
                .into(),
        }
    }
}

impl Related<prestador::Entity> for Entity {
    fn to() -> RelationDef { Relation::Prestador.def() }
}

impl Related<cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Inserts a servico stamped with the current time. Callers check that both
/// references exist first.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    nome: &str,
    categoria_servico: &str,
    prestador_id: i32,
    cliente_id: i32,
) -> Result<Model, errors::ModelError> {
    let nome = validation::required_text("nome", Some(nome))?;
    let categoria_servico = validation::required_text("categoriaServico", Some(categoria_servico))?;
    let am = ActiveModel {
        nome: Set(nome.to_string()),
        categoria_servico: Set(categoria_servico.to_string()),
        data_cadastro: Set(Utc::now().into()),
        prestador_id: Set(prestador_id),
        cliente_id: Set(cliente_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
