//! Expertise workflow endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::expertise::{CreateExpertise, Expertise, UpdateExpertise},
    AppState,
};

/// List all expertises
#[utoipa::path(
    get,
    path = "/expertises",
    tag = "expertises",
    responses(
        (status = 200, description = "Expertise list", body = Vec<Expertise>)
    )
)]
pub async fn list_expertises(State(state): State<AppState>) -> Json<Vec<Expertise>> {
    Json(state.services.expertises.list().await)
}

/// Get one expertise
#[utoipa::path(
    get,
    path = "/expertises/{id}",
    tag = "expertises",
    params(("id" = Uuid, Path, description = "Expertise ID")),
    responses(
        (status = 200, description = "Expertise record", body = Expertise),
        (status = 404, description = "Expertise not found")
    )
)]
pub async fn get_expertise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Expertise>> {
    Ok(Json(state.services.expertises.get(id).await?))
}

/// Create an expertise
#[utoipa::path(
    post,
    path = "/expertises",
    tag = "expertises",
    request_body = CreateExpertise,
    responses(
        (status = 201, description = "Expertise created", body = Expertise),
        (status = 409, description = "Expertise number already exists")
    )
)]
pub async fn create_expertise(
    State(state): State<AppState>,
    Json(data): Json<CreateExpertise>,
) -> AppResult<(StatusCode, Json<Expertise>)> {
    data.validate()?;
    let expertise = state.services.expertises.create(data).await?;
    Ok((StatusCode::CREATED, Json(expertise)))
}

/// Update an expertise
#[utoipa::path(
    put,
    path = "/expertises/{id}",
    tag = "expertises",
    params(("id" = Uuid, Path, description = "Expertise ID")),
    request_body = UpdateExpertise,
    responses(
        (status = 200, description = "Expertise updated", body = Expertise),
        (status = 404, description = "Expertise not found")
    )
)]
pub async fn update_expertise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateExpertise>,
) -> AppResult<Json<Expertise>> {
    data.validate()?;
    Ok(Json(state.services.expertises.update(id, data).await?))
}

/// Delete an expertise
#[utoipa::path(
    delete,
    path = "/expertises/{id}",
    tag = "expertises",
    params(("id" = Uuid, Path, description = "Expertise ID")),
    responses(
        (status = 204, description = "Expertise deleted"),
        (status = 404, description = "Expertise not found")
    )
)]
pub async fn delete_expertise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.expertises.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
