//! Verification/certification schedule projection
//!
//! Schedule items are derived on every read from the equipment and
//! specialist collections; they are never stored.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// What kind of record a schedule item was projected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Equipment,
    Cert,
}

/// Schedule item status (same thresholds as the expiry classifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Overdue,
    Expiring,
    Active,
}

/// One entry of the verification/certification timeline
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleItem {
    pub kind: ScheduleKind,
    pub name: String,
    pub subtitle: String,
    pub department: String,
    pub responsible: String,
    pub valid_until: NaiveDate,
    pub next_date: Option<NaiveDate>,
    pub status: ScheduleStatus,
    /// Signed days remaining; negative when overdue
    pub days_left: i64,
    /// Category code or "method level", e.g. "УЗТ" or "УЗК II"
    pub tag: String,
}

/// Items of one calendar month, in timeline order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleMonth {
    /// "YYYY-MM" month key
    pub key: String,
    /// Whether this bucket is the current month (display emphasis only)
    pub is_current: bool,
    /// Whether the bucket lies entirely in the past
    pub is_past: bool,
    pub items: Vec<ScheduleItem>,
}
