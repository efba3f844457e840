//! Registry of signed expertise conclusions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{RegistryStatus, RtnStatus};

/// Registry entry for a signed conclusion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistryEntry {
    pub id: Uuid,
    /// Expertise number, e.g. "ЭПБ-2024-031"
    pub number: String,
    /// Rostechnadzor registration number
    pub reg_number: Option<String>,
    pub object_name: String,
    pub object_type: String,
    pub customer: String,
    pub expert: String,
    pub signed_at: NaiveDate,
    pub valid_until: NaiveDate,
    pub status: RegistryStatus,
    pub rtn_status: RtnStatus,
    pub file_size: Option<String>,
}

/// Create registry entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRegistryEntry {
    #[validate(length(min = 1))]
    pub number: String,
    pub reg_number: Option<String>,
    #[validate(length(min = 1))]
    pub object_name: String,
    pub object_type: String,
    pub customer: String,
    pub expert: String,
    pub signed_at: NaiveDate,
    pub valid_until: NaiveDate,
    pub status: Option<RegistryStatus>,
    pub rtn_status: Option<RtnStatus>,
    pub file_size: Option<String>,
}

/// Update registry entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistryEntry {
    pub reg_number: Option<String>,
    pub object_name: Option<String>,
    pub object_type: Option<String>,
    pub customer: Option<String>,
    pub expert: Option<String>,
    pub signed_at: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub status: Option<RegistryStatus>,
    pub rtn_status: Option<RtnStatus>,
    pub file_size: Option<String>,
}
