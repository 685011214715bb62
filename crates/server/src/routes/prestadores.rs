use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::{db::prestador_service, views::PessoaView};
use tracing::info;

use crate::{errors::JsonApiError, routes::PessoaInput, state::ServerState};

#[utoipa::path(
    get, path = "/prestadores", tag = "prestadores",
    responses(
        (status = 200, description = "Prestadores with their servicos", body = [crate::openapi::PessoaComServicosDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PessoaView>>, JsonApiError> {
    let list = prestador_service::list_prestadores(&state.db)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to list prestadores"))?;
    info!(count = list.len(), "list prestadores");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/prestadores/{id}", tag = "prestadores",
    params(("id" = i32, Path, description = "Prestador ID")),
    responses(
        (status = 200, description = "Prestador, or null when absent", body = crate::openapi::PessoaDoc),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<PessoaView>>, JsonApiError> {
    let Path(id) = path?;
    let found = prestador_service::get_prestador(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch prestador"))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/prestadores/", tag = "prestadores",
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
    let created = prestador_service::create_prestador(
        &state.db,
        input.nome.as_deref(),
        input.sobrenome.as_deref(),
        input.time_do_coracao.as_deref(),
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to create prestador"))?;
    info!(id = created.id(), "created prestador");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/prestadores/{id}", tag = "prestadores",
    params(("id" = i32, Path, description = "Prestador ID")),
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
    let updated = prestador_service::update_prestador(
        &state.db,
        id,
        input.nome.as_deref(),
        input.sobrenome.as_deref(),
        input.time_do_coracao.as_deref(),
    )
    .await
    .map_err(|e| JsonApiError::from_service(e, "Failed to update prestador"))?;
    info!(id, "updated prestador");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/prestadores/{id}", tag = "prestadores",
    params(("id" = i32, Path, description = "Prestador ID")),
    responses(
        (status = 200, description = "Deleted prestador", body = crate::openapi::PessoaDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PessoaView>, JsonApiError> {
    let Path(id) = path?;
    let deleted = prestador_service::delete_prestador(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete prestador"))?;
    info!(id, "deleted prestador");
    Ok(Json(deleted))
}
