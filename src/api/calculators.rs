//! Engineering calculator endpoints
//!
//! Domain validation failures inside the calculators surface as 422 with
//! the uniform error body; the computation cores themselves never error.

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::calculator::{
        CorrosionMeasurement, CorrosionRateResult, ResidualHistoryEntry, ResidualLifeInput,
        ResidualLifeResult, WallThicknessInput, WallThicknessResult,
    },
    AppState,
};

/// Residual-life estimate (РД 09-539-03)
#[utoipa::path(
    post,
    path = "/calc/residual-life",
    tag = "calculators",
    request_body = ResidualLifeInput,
    responses(
        (status = 200, description = "Calculation result", body = ResidualLifeResult),
        (status = 422, description = "Inputs outside the calculation domain")
    )
)]
pub async fn residual_life(
    State(state): State<AppState>,
    Json(input): Json<ResidualLifeInput>,
) -> AppResult<Json<ResidualLifeResult>> {
    state
        .services
        .calculators
        .residual_life(input)
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::CalculationRejected(
                "Скорость коррозии должна быть > 0, фактическая толщина — больше минимальной"
                    .to_string(),
            )
        })
}

/// Recent residual-life calculations, most recent first
#[utoipa::path(
    get,
    path = "/calc/residual-life/history",
    tag = "calculators",
    responses(
        (status = 200, description = "Calculation history", body = Vec<ResidualHistoryEntry>)
    )
)]
pub async fn residual_history(
    State(state): State<AppState>,
) -> Json<Vec<ResidualHistoryEntry>> {
    Json(state.services.calculators.residual_history().await)
}

/// Minimum wall thickness under pressure (ГОСТ 32388-2013)
#[utoipa::path(
    post,
    path = "/calc/wall-thickness",
    tag = "calculators",
    request_body = WallThicknessInput,
    responses(
        (status = 200, description = "Calculation result", body = WallThicknessResult),
        (status = 422, description = "Inputs outside the calculation domain")
    )
)]
pub async fn wall_thickness(
    State(state): State<AppState>,
    Json(input): Json<WallThicknessInput>,
) -> AppResult<Json<WallThicknessResult>> {
    state
        .services
        .calculators
        .wall_thickness(&input)
        .map(Json)
        .ok_or_else(|| {
            AppError::CalculationRejected(
                "Недопустимые параметры расчёта: проверьте [σ], φ и давление".to_string(),
            )
        })
}

/// Corrosion rate from thickness measurements (РД 03-421-01)
#[utoipa::path(
    post,
    path = "/calc/corrosion-rate",
    tag = "calculators",
    request_body = Vec<CorrosionMeasurement>,
    responses(
        (status = 200, description = "Calculation result", body = CorrosionRateResult),
        (status = 422, description = "Fewer than two valid measurements")
    )
)]
pub async fn corrosion_rate(
    State(state): State<AppState>,
    Json(measurements): Json<Vec<CorrosionMeasurement>>,
) -> AppResult<Json<CorrosionRateResult>> {
    state
        .services
        .calculators
        .corrosion_rate(&measurements)
        .map(Json)
        .ok_or_else(|| {
            AppError::CalculationRejected(
                "Нужно не менее двух корректных замеров в разные годы".to_string(),
            )
        })
}
