//! JSON projections of the entities.
//!
//! Every response body is built here. Each entity has one projection
//! function taking a [`Projection`]: `Full` is the standalone shape, `Summary`
//! the shape used when the entity is embedded in another one.

use models::{cliente, prestador, servico};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Full,
    Summary,
}

/// Customers and providers share their field set.
pub trait Pessoa {
    fn id(&self) -> i32;
    fn nome(&self) -> &str;
    fn sobrenome(&self) -> &str;
    fn time_do_coracao(&self) -> &str;
}

impl Pessoa for cliente::Model {
    fn id(&self) -> i32 { self.id }
    fn nome(&self) -> &str { &self.nome }
    fn sobrenome(&self) -> &str { &self.sobrenome }
    fn time_do_coracao(&self) -> &str { &self.time_do_coracao }
}

impl Pessoa for prestador::Model {
    fn id(&self) -> i32 { self.id }
    fn nome(&self) -> &str { &self.nome }
    fn sobrenome(&self) -> &str { &self.sobrenome }
    fn time_do_coracao(&self) -> &str { &self.time_do_coracao }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PessoaView {
    Full(PessoaFull),
    Summary(PessoaSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PessoaFull {
    pub id: i32,
    pub nome: String,
    pub sobrenome: String,
    pub time_do_coracao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servicos: Option<Vec<ServicoView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PessoaSummary {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServicoView {
    Full(ServicoFull),
    Summary(ServicoSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoFull {
    pub id: i32,
    pub nome: String,
    pub data_cadastro: DateTimeWithTimeZone,
    pub categoria_servico: String,
    pub prestador: Option<PessoaView>,
    pub cliente: Option<PessoaView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicoSummary {
    pub id: i32,
    pub nome: String,
    pub categoria_servico: String,
}

pub fn pessoa_view<P: Pessoa>(p: &P, projection: Projection) -> PessoaView {
    match projection {
        Projection::Full => PessoaView::Full(PessoaFull {
            id: p.id(),
            nome: p.nome().to_string(),
            sobrenome: p.sobrenome().to_string(),
            time_do_coracao: p.time_do_coracao().to_string(),
            servicos: None,
        }),
        Projection::Summary => PessoaView::Summary(PessoaSummary { id: p.id(), nome: p.nome().to_string() }),
    }
}

/// Relations are embedded as summaries and only in the full projection.
pub fn servico_view(
    s: &servico::Model,
    prestador: Option<&prestador::Model>,
    cliente: Option<&cliente::Model>,
    projection: Projection,
) -> ServicoView {
    match projection {
        Projection::Full => ServicoView::Full(ServicoFull {
            id: s.id,
            nome: s.nome.clone(),
            data_cadastro: s.data_cadastro,
            categoria_servico: s.categoria_servico.clone(),
            prestador: prestador.map(|p| pessoa_view(p, Projection::Summary)),
            cliente: cliente.map(|c| pessoa_view(c, Projection::Summary)),
        }),
        Projection::Summary => ServicoView::Summary(ServicoSummary {
            id: s.id,
            nome: s.nome.clone(),
            categoria_servico: s.categoria_servico.clone(),
        }),
    }
}

impl PessoaView {
    pub fn id(&self) -> i32 {
        match self {
            PessoaView::Full(f) => f.id,
            PessoaView::Summary(s) => s.id,
        }
    }

    /// Attach owned servicos (summary shape). No-op on a summary.
    pub fn with_servicos(self, servicos: &[servico::Model]) -> Self {
        match self {
            PessoaView::Full(mut full) => {
                full.servicos = Some(
                    servicos.iter().map(|s| servico_view(s, None, None, Projection::Summary)).collect(),
                );
                PessoaView::Full(full)
            }
            summary => summary,
        }
    }
}

impl ServicoView {
    pub fn id(&self) -> i32 {
        match self {
            ServicoView::Full(f) => f.id,
            ServicoView::Summary(s) => s.id,
        }
    }
}
