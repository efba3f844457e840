//! Verification/certification schedule endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    models::schedule::{ScheduleItem, ScheduleMonth},
    AppState,
};

use super::DateQuery;

/// Flat schedule timeline, sorted ascending by expiry date
#[utoipa::path(
    get,
    path = "/schedule",
    tag = "schedule",
    params(DateQuery),
    responses(
        (status = 200, description = "Schedule timeline", body = Vec<ScheduleItem>)
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<ScheduleItem>> {
    Json(state.services.schedule.timeline(query.today()).await)
}

/// Schedule grouped by calendar month
#[utoipa::path(
    get,
    path = "/schedule/months",
    tag = "schedule",
    params(DateQuery),
    responses(
        (status = 200, description = "Month-grouped schedule", body = Vec<ScheduleMonth>)
    )
)]
pub async fn get_schedule_months(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<ScheduleMonth>> {
    Json(state.services.schedule.months(query.today()).await)
}
