//! Registry of signed conclusions endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::registry::{CreateRegistryEntry, RegistryEntry, UpdateRegistryEntry},
    AppState,
};

/// List all registry entries
#[utoipa::path(
    get,
    path = "/registry",
    tag = "registry",
    responses(
        (status = 200, description = "Registry entries", body = Vec<RegistryEntry>)
    )
)]
pub async fn list_registry(State(state): State<AppState>) -> Json<Vec<RegistryEntry>> {
    Json(state.services.registry.list().await)
}

/// Get one registry entry
#[utoipa::path(
    get,
    path = "/registry/{id}",
    tag = "registry",
    params(("id" = Uuid, Path, description = "Registry entry ID")),
    responses(
        (status = 200, description = "Registry entry", body = RegistryEntry),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_registry_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RegistryEntry>> {
    Ok(Json(state.services.registry.get(id).await?))
}

/// Create a registry entry
#[utoipa::path(
    post,
    path = "/registry",
    tag = "registry",
    request_body = CreateRegistryEntry,
    responses(
        (status = 201, description = "Entry created", body = RegistryEntry),
        (status = 409, description = "Expertise number already registered")
    )
)]
pub async fn create_registry_entry(
    State(state): State<AppState>,
    Json(data): Json<CreateRegistryEntry>,
) -> AppResult<(StatusCode, Json<RegistryEntry>)> {
    data.validate()?;
    let entry = state.services.registry.create(data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a registry entry
#[utoipa::path(
    put,
    path = "/registry/{id}",
    tag = "registry",
    params(("id" = Uuid, Path, description = "Registry entry ID")),
    request_body = UpdateRegistryEntry,
    responses(
        (status = 200, description = "Entry updated", body = RegistryEntry),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn update_registry_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateRegistryEntry>,
) -> AppResult<Json<RegistryEntry>> {
    data.validate()?;
    Ok(Json(state.services.registry.update(id, data).await?))
}

/// Delete a registry entry
#[utoipa::path(
    delete,
    path = "/registry/{id}",
    tag = "registry",
    params(("id" = Uuid, Path, description = "Registry entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_registry_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.registry.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Export the registry as semicolon-delimited CSV
#[utoipa::path(
    get,
    path = "/registry/export",
    tag = "registry",
    responses(
        (status = 200, description = "CSV document", body = String, content_type = "text/csv")
    )
)]
pub async fn export_registry(State(state): State<AppState>) -> impl IntoResponse {
    let csv = state.services.registry.export_csv().await;
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"epb_registry.csv\"",
            ),
        ],
        csv,
    )
}
