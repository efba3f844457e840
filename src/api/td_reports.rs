//! Technical-diagnostics report endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::td_report::{CreateTdReport, TdReport, UpdateTdReport},
    AppState,
};

use super::DateQuery;

/// List all TD reports
#[utoipa::path(
    get,
    path = "/td-reports",
    tag = "td-reports",
    responses(
        (status = 200, description = "TD report list", body = Vec<TdReport>)
    )
)]
pub async fn list_td_reports(State(state): State<AppState>) -> Json<Vec<TdReport>> {
    Json(state.services.td_reports.list().await)
}

/// Get one TD report
#[utoipa::path(
    get,
    path = "/td-reports/{id}",
    tag = "td-reports",
    params(("id" = Uuid, Path, description = "TD report ID")),
    responses(
        (status = 200, description = "TD report", body = TdReport),
        (status = 404, description = "TD report not found")
    )
)]
pub async fn get_td_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TdReport>> {
    Ok(Json(state.services.td_reports.get(id).await?))
}

/// Create a TD report
#[utoipa::path(
    post,
    path = "/td-reports",
    tag = "td-reports",
    request_body = CreateTdReport,
    responses(
        (status = 201, description = "TD report created", body = TdReport),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_td_report(
    State(state): State<AppState>,
    Json(data): Json<CreateTdReport>,
) -> AppResult<(StatusCode, Json<TdReport>)> {
    data.validate()?;
    let report = state.services.td_reports.create(data).await;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Update a TD report
#[utoipa::path(
    put,
    path = "/td-reports/{id}",
    tag = "td-reports",
    params(("id" = Uuid, Path, description = "TD report ID")),
    request_body = UpdateTdReport,
    responses(
        (status = 200, description = "TD report updated", body = TdReport),
        (status = 404, description = "TD report not found")
    )
)]
pub async fn update_td_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DateQuery>,
    Json(data): Json<UpdateTdReport>,
) -> AppResult<Json<TdReport>> {
    data.validate()?;
    Ok(Json(
        state
            .services
            .td_reports
            .update(id, data, query.today())
            .await?,
    ))
}

/// Delete a TD report
#[utoipa::path(
    delete,
    path = "/td-reports/{id}",
    tag = "td-reports",
    params(("id" = Uuid, Path, description = "TD report ID")),
    responses(
        (status = 204, description = "TD report deleted"),
        (status = 404, description = "TD report not found")
    )
)]
pub async fn delete_td_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.td_reports.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Export TD reports as semicolon-delimited CSV
#[utoipa::path(
    get,
    path = "/td-reports/export",
    tag = "td-reports",
    responses(
        (status = 200, description = "CSV document", body = String, content_type = "text/csv")
    )
)]
pub async fn export_td_reports(State(state): State<AppState>) -> impl IntoResponse {
    let csv = state.services.td_reports.export_csv().await;
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"td_reports.csv\"",
            ),
        ],
        csv,
    )
}
