//! NDT specialist endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::specialist::{CreateCert, CreateSpecialist, SpecialistDetails, UpdateSpecialist},
    AppState,
};

use super::DateQuery;

/// List all specialists with derived statuses
#[utoipa::path(
    get,
    path = "/specialists",
    tag = "specialists",
    params(DateQuery),
    responses(
        (status = 200, description = "Specialist list", body = Vec<SpecialistDetails>)
    )
)]
pub async fn list_specialists(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<SpecialistDetails>> {
    Json(state.services.specialists.list(query.today()).await)
}

/// Get one specialist
#[utoipa::path(
    get,
    path = "/specialists/{id}",
    tag = "specialists",
    params(("id" = Uuid, Path, description = "Specialist ID"), DateQuery),
    responses(
        (status = 200, description = "Specialist record", body = SpecialistDetails),
        (status = 404, description = "Specialist not found")
    )
)]
pub async fn get_specialist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<SpecialistDetails>> {
    Ok(Json(
        state.services.specialists.get(id, query.today()).await?,
    ))
}

/// Create a specialist
#[utoipa::path(
    post,
    path = "/specialists",
    tag = "specialists",
    request_body = CreateSpecialist,
    responses(
        (status = 201, description = "Specialist created", body = SpecialistDetails),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_specialist(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
    Json(data): Json<CreateSpecialist>,
) -> AppResult<(StatusCode, Json<SpecialistDetails>)> {
    data.validate()?;
    let details = state.services.specialists.create(data, query.today()).await;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Update a specialist
#[utoipa::path(
    put,
    path = "/specialists/{id}",
    tag = "specialists",
    params(("id" = Uuid, Path, description = "Specialist ID")),
    request_body = UpdateSpecialist,
    responses(
        (status = 200, description = "Specialist updated", body = SpecialistDetails),
        (status = 404, description = "Specialist not found")
    )
)]
pub async fn update_specialist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
    Json(data): Json<UpdateSpecialist>,
) -> AppResult<Json<SpecialistDetails>> {
    data.validate()?;
    Ok(Json(
        state
            .services
            .specialists
            .update(id, data, query.today())
            .await?,
    ))
}

/// Append a certification to a specialist
#[utoipa::path(
    post,
    path = "/specialists/{id}/certs",
    tag = "specialists",
    params(("id" = Uuid, Path, description = "Specialist ID")),
    request_body = CreateCert,
    responses(
        (status = 201, description = "Certification added", body = SpecialistDetails),
        (status = 404, description = "Specialist not found")
    )
)]
pub async fn add_cert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
    Json(data): Json<CreateCert>,
) -> AppResult<(StatusCode, Json<SpecialistDetails>)> {
    data.validate()?;
    let details = state
        .services
        .specialists
        .add_cert(id, data, query.today())
        .await?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Delete a specialist
#[utoipa::path(
    delete,
    path = "/specialists/{id}",
    tag = "specialists",
    params(("id" = Uuid, Path, description = "Specialist ID")),
    responses(
        (status = 204, description = "Specialist deleted"),
        (status = 404, description = "Specialist not found")
    )
)]
pub async fn delete_specialist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.specialists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
