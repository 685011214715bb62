use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::{db::cliente_service, views::PessoaView};
use tracing::info;

use crate::{errors::JsonApiError, routes::PessoaInput, state::ServerState};

#[utoipa::path(
    get, path = "/clientes", tag = "clientes",
    responses(
        (status = 200, description = "Clientes with their servicos", body = [crate::openapi::PessoaComServicosDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PessoaView>>, JsonApiError> {
    let list = cliente_service::list_clientes(&state.db)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to list clientes"))?;
    info!(count = list.len(), "list clientes");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Cliente, or null when absent", body = crate::openapi::PessoaDoc),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<PessoaView>>, JsonApiError> {
    let Path(id) = path?;
    let found = cliente_service::get_cliente(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch cliente"))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/clientes/", tag = "clientes",
    request_body = PessoaInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PessoaDoc),
        (status = 400, description = "Missing field", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<PessoaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PessoaView>), JsonApiError> {
    let Json(input) = body?;
    let created = cliente_service::create_cliente(
        &state.db,
        input.nome.as_deref(),
        input.sobrenome.as_deref(),
        input.time_do_coracao.as_deref(),
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to create cliente"))?;
    info!(id = created.id(), "created cliente");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    request_body = PessoaInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PessoaDoc),
        (status = 400, description = "Blank field", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<PessoaInput>, JsonRejection>,
) -> Result<Json<PessoaView>, JsonApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    let updated = cliente_service::update_cliente(
        &state.db,
        id,
        input.nome.as_deref(),
        input.sobrenome.as_deref(),
        input.time_do_coracao.as_deref(),
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to update cliente"))?;
    info!(id, "updated cliente");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Deleted cliente", body = crate::openapi::PessoaDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PessoaView>, JsonApiError> {
    let Path(id) = path?;
    let deleted = cliente_service::delete_cliente(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete cliente"))?;
    info!(id, "deleted cliente");
    Ok(Json(deleted))
}
