use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::{db::servico_service, views::ServicoView};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

/// Body of POST/PUT on `/servicos`. Create requires all four fields; update
/// applies whichever are present.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicoInput {
    pub nome: Option<String>,
    pub categoria_servico: Option<String>,
    pub prestador_id: Option<i32>,
    pub cliente_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/servicos", tag = "servicos",
    responses(
        (status = 200, description = "Servicos with prestador and cliente", body = [crate::openapi::ServicoDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServicoView>>, JsonApiError> {
    let list = servico_service::list_servicos(&state.db)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to list servicos"))?;
    info!(count = list.len(), "list servicos");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/servicos/{id}", tag = "servicos",
    params(("id" = i32, Path, description = "Servico ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServicoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ServicoView>, JsonApiError> {
    let Path(id) = path?;
    let found = servico_service::get_servico(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch servico"))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/servicos/", tag = "servicos",
    request_body = ServicoInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServicoDoc),
        (status = 400, description = "Missing field", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Prestador or cliente not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ServicoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ServicoView>), JsonApiError> {
    let Json(input) = body?;
    info!(prestador_id = ?input.prestador_id, cliente_id = ?input.cliente_id, "servico_create_request");
    let created = servico_service::create_servico(
        &state.db,
        input.nome.as_deref(),
        input.categoria_servico.as_deref(),
        input.prestador_id,
        input.cliente_id,
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to create servico"))?;
    info!(id = created.id(), "created servico");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/servicos/{id}", tag = "servicos",
    params(("id" = i32, Path, description = "Servico ID")),
    request_body = ServicoInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServicoDoc),
        (status = 400, description = "Blank field", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Servico, prestador or cliente not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<ServicoInput>, JsonRejection>,
) -> Result<Json<ServicoView>, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    let updated = servico_service::update_servico(
        &state.db,
        id,
        input.nome.as_deref(),
        input.categoria_servico.as_deref(),
        input.prestador_id,
        input.cliente_id,
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to update servico"))?;
    info!(id, "updated servico");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/servicos/{id}", tag = "servicos",
    params(("id" = i32, Path, description = "Servico ID")),
    responses(
        (status = 200, description = "Deleted servico", body = crate::openapi::ServicoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ServicoView>, JsonApiError> {
    let Path(id) = path?;
    let deleted = servico_service::delete_servico(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete servico"))?;
    info!(id, "deleted servico");
    Ok(Json(deleted))
}
