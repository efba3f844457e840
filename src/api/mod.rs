//! API handlers for EPB REST endpoints

pub mod calculators;
pub mod equipment;
pub mod expertises;
pub mod health;
pub mod openapi;
pub mod registry;
pub mod schedule;
pub mod specialists;
pub mod td_reports;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

/// Optional reference-date override, used by status-deriving endpoints.
/// Defaults to the current UTC date.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DateQuery {
    /// Reference date (YYYY-MM-DD); defaults to today
    pub date: Option<NaiveDate>,
}

impl DateQuery {
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
