//! Technical-diagnostics report model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{NkMethod, TdStatus};

/// NDT protocol attached to a TD report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NkProtocol {
    pub id: Uuid,
    pub method: NkMethod,
    pub number: String,
    pub date: NaiveDate,
    pub specialist: String,
    pub defects_found: bool,
    pub file_name: Option<String>,
}

/// Technical-diagnostics report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TdReport {
    pub id: Uuid,
    /// Report number, e.g. "ТД-2025-001"
    pub number: String,
    pub title: String,
    pub object_name: String,
    pub object_type: String,
    /// Hazardous production facility registration number
    pub opo: String,
    pub status: TdStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub issued_at: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub expert: String,
    pub customer: String,
    pub protocols: Vec<NkProtocol>,
    /// Residual life estimate in years, when computed
    pub residual_life: Option<f64>,
    pub defect_count: u32,
    pub conclusion: Option<String>,
    pub recommendations: Option<String>,
}

/// Create TD report request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTdReport {
    #[validate(length(min = 1))]
    pub number: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub object_name: String,
    pub object_type: String,
    pub opo: String,
    pub status: Option<TdStatus>,
    pub created_at: NaiveDate,
    pub expert: String,
    pub customer: String,
    #[serde(default)]
    pub protocols: Vec<CreateProtocol>,
    pub residual_life: Option<f64>,
    #[serde(default)]
    pub defect_count: u32,
    pub conclusion: Option<String>,
    pub recommendations: Option<String>,
}

/// Update TD report request. Protocols, when present, replace the
/// collection wholesale.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTdReport {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub object_name: Option<String>,
    pub object_type: Option<String>,
    pub opo: Option<String>,
    pub status: Option<TdStatus>,
    pub issued_at: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub expert: Option<String>,
    pub customer: Option<String>,
    pub protocols: Option<Vec<CreateProtocol>>,
    pub residual_life: Option<f64>,
    pub defect_count: Option<u32>,
    pub conclusion: Option<String>,
    pub recommendations: Option<String>,
}

/// Create NDT protocol request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProtocol {
    pub method: NkMethod,
    #[validate(length(min = 1))]
    pub number: String,
    pub date: NaiveDate,
    pub specialist: String,
    pub defects_found: bool,
    pub file_name: Option<String>,
}

impl CreateProtocol {
    pub fn into_protocol(self) -> NkProtocol {
        NkProtocol {
            id: Uuid::new_v4(),
            method: self.method,
            number: self.number,
            date: self.date,
            specialist: self.specialist,
            defects_found: self.defects_found,
            file_name: self.file_name,
        }
    }
}
