use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub details: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PessoaDoc {
    pub id: i32,
    pub nome: String,
    pub sobrenome: String,
    pub time_do_coracao: String,
}

#[derive(ToSchema)]
pub struct PessoaResumoDoc { pub id: i32, pub nome: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServicoResumoDoc {
    pub id: i32,
    pub nome: String,
    pub categoria_servico: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PessoaComServicosDoc {
    pub id: i32,
    pub nome: String,
    pub sobrenome: String,
    pub time_do_coracao: String,
    pub servicos: Vec<ServicoResumoDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServicoDoc {
    pub id: i32,
    pub nome: String,
    /// RFC 3339 timestamp
    pub data_cadastro: String,
    pub categoria_servico: String,
    pub prestador: PessoaResumoDoc,
    pub cliente: PessoaResumoDoc,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Servicos API", description = "Clientes, prestadores and the servicos linking them"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::clientes::list,
        crate::routes::clientes::get,
        crate::routes::clientes::create,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
        crate::routes::prestadores::list,
        crate::routes::prestadores::get,
        crate::routes::prestadores::create,
        crate::routes::prestadores::update,
        crate::routes::prestadores::delete,
        crate::routes::servicos::list,
        crate::routes::servicos::get,
        crate::routes::servicos::create,
        crate::routes::servicos::update,
        crate::routes::servicos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            PessoaDoc,
            PessoaResumoDoc,
            ServicoResumoDoc,
            PessoaComServicosDoc,
            ServicoDoc,
            crate::routes::PessoaInput,
            crate::routes::servicos::ServicoInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes"),
        (name = "prestadores"),
        (name = "servicos")
    )
)]
pub struct ApiDoc;
