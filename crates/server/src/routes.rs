pub mod clientes;
pub mod prestadores;
pub mod servicos;

use axum::{routing::get, Json, Router};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

/// Body of POST/PUT on `/clientes` and `/prestadores`. Every field is
/// optional here; create enforces presence, update applies what is given.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoaInput {
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub time_do_coracao: Option<String>,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")))]
pub async fn root() -> &'static str {
    "Hello World!"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: resources, root greeting, health, API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let clientes = Router::new()
        .route("/clientes", get(clientes::list).post(clientes::create))
        .route("/clientes/", get(clientes::list).post(clientes::create))
        .route("/clientes/:id", get(clientes::get).put(clientes::update).delete(clientes::delete));

    let prestadores = Router::new()
        .route("/prestadores", get(prestadores::list).post(prestadores::create))
        .route("/prestadores/", get(prestadores::list).post(prestadores::create))
        .route("/prestadores/:id", get(prestadores::get).put(prestadores::update).delete(prestadores::delete));

    let servicos = Router::new()
        .route("/servicos", get(servicos::list).post(servicos::create))
        .route("/servicos/", get(servicos::list).post(servicos::create))
        .route("/servicos/:id", get(servicos::get).put(servicos::update).delete(servicos::delete));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(clientes)
        .merge(prestadores)
        .merge(servicos)
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
