//! Expertise (ЭПБ) workflow model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::ExpertiseStatus;

/// Industrial safety expertise record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Expertise {
    pub id: Uuid,
    /// Expertise number, e.g. "ЭПБ-2024-041"
    pub number: String,
    pub object_name: String,
    pub object_type: String,
    pub customer: String,
    pub status: ExpertiseStatus,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
    /// Rostechnadzor registration number, assigned after signing
    pub reg_number: Option<String>,
    pub expert: String,
}

/// Create expertise request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpertise {
    #[validate(length(min = 1))]
    pub number: String,
    #[validate(length(min = 1))]
    pub object_name: String,
    pub object_type: String,
    pub customer: String,
    pub status: Option<ExpertiseStatus>,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
    pub expert: String,
}

/// Update expertise request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpertise {
    #[validate(length(min = 1))]
    pub object_name: Option<String>,
    pub object_type: Option<String>,
    pub customer: Option<String>,
    pub status: Option<ExpertiseStatus>,
    pub deadline: Option<NaiveDate>,
    pub reg_number: Option<String>,
    pub expert: Option<String>,
}
