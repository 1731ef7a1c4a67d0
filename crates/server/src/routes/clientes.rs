use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderName, StatusCode},
    Json,
};
use service::cliente::domain::{ClienteCreateDto, ClienteDto};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::errors::JsonApiError;
use crate::routes::API_PREFIX;
use crate::state::ServerState;

/// Reject malformed bodies and failed field validation before the service sees them.
/// Oversized bodies and wrong content types keep their own status; everything else is 400.
fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JsonApiError> {
    let Json(input) = payload.map_err(|e| {
        warn!(err = %e.body_text(), status = %e.status(), "malformed request body");
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => {
                JsonApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large", Some(e.body_text()))
            }
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                JsonApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type", Some(e.body_text()))
            }
            _ => JsonApiError::bad_request(e.body_text()),
        }
    })?;
    input.validate().map_err(|e| {
        warn!(err = %e, "request validation failed");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
    })?;
    Ok(input)
}

fn cliente_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, JsonApiError> {
    let Path(id) = path.map_err(|e| {
        warn!(err = %e.body_text(), "invalid cliente id");
        JsonApiError::bad_request(e.body_text())
    })?;
    Ok(id)
}

#[utoipa::path(
    get, path = "/api/v1/clientes", tag = "clientes",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ClienteDoc]),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClienteDto>>, JsonApiError> {
    info!("list clientes request");
    let clientes = state.clientes.list().await?;
    info!(count = clientes.len(), "list clientes");
    Ok(Json(clientes))
}

#[utoipa::path(
    get, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = Uuid, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClienteDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ClienteDto>, JsonApiError> {
    let id = cliente_id(path)?;
    info!(%id, "get cliente request");
    match state.clientes.get(id).await? {
        Some(c) => Ok(Json(c)),
        None => {
            warn!(%id, "cliente not found");
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some("Cliente não encontrado.".into())))
        }
    }
}

#[utoipa::path(
    post, path = "/api/v1/clientes", tag = "clientes",
    request_body = crate::openapi::ClienteCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClienteDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ClienteCreateDto>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ClienteDto>), JsonApiError> {
    let input = validated(payload)?;
    info!(email = %input.email, "create cliente request");

    match state.clientes.create(input).await {
        Ok(created) => {
            info!(id = %created.id, "created cliente");
            let location = format!("{}/clientes/{}", API_PREFIX, created.id);
            Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
        }
        Err(e) => {
            warn!(err = %e, "create cliente failed");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    put, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = Uuid, Path, description = "Cliente ID")),
    request_body = crate::openapi::ClienteDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ClienteDto>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = cliente_id(path)?;
    let input = validated(payload)?;
    info!(%id, "update cliente request");

    match state.clientes.update(id, input).await {
        Ok(()) => {
            info!(%id, "updated cliente");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            warn!(%id, err = %e, "update cliente failed");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    delete, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = Uuid, Path, description = "Cliente ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = cliente_id(path)?;
    info!(%id, "delete cliente request");
    if state.clientes.delete(id).await? {
        info!(%id, "deleted cliente");
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!(%id, "cliente not found for removal");
        Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some("Cliente não encontrado.".into())))
    }
}
