//! Equipment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, CreateVerification, EquipmentDetails, UpdateEquipment},
    AppState,
};

use super::DateQuery;

/// List all equipment with derived statuses
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(DateQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentDetails>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<EquipmentDetails>> {
    Json(state.services.equipment.list(query.today()).await)
}

/// Get one equipment record
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID"), DateQuery),
    responses(
        (status = 200, description = "Equipment record", body = EquipmentDetails),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<EquipmentDetails>> {
    Ok(Json(state.services.equipment.get(id, query.today()).await?))
}

/// Create an equipment record
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDetails),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentDetails>)> {
    data.validate()?;
    let details = state.services.equipment.create(data, query.today()).await;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Update an equipment record
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDetails),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentDetails>> {
    data.validate()?;
    Ok(Json(
        state.services.equipment.update(id, data, query.today()).await?,
    ))
}

/// Append a verification to an equipment record
#[utoipa::path(
    post,
    path = "/equipment/{id}/verifications",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = CreateVerification,
    responses(
        (status = 201, description = "Verification added", body = EquipmentDetails),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn add_verification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
    Json(data): Json<CreateVerification>,
) -> AppResult<(StatusCode, Json<EquipmentDetails>)> {
    data.validate()?;
    let details = state
        .services
        .equipment
        .add_verification(id, data, query.today())
        .await?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Delete an equipment record
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
