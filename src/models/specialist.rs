//! NDT specialist and certification models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{NkLevel, NkMethod, SpecialistState, SpecialistStatus};

/// NDT certification (удостоверение) carrying a method and a level.
/// Immutable once created; the collection is replaced wholesale on edit.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NkCert {
    pub id: Uuid,
    pub method: NkMethod,
    pub level: NkLevel,
    pub cert_number: String,
    pub issued_at: NaiveDate,
    pub valid_until: NaiveDate,
    pub issued_by: String,
    /// Authorized object categories
    pub objects: Vec<String>,
}

/// NDT specialist record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NkSpecialist {
    pub id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub email: String,
    /// Manually-set state; effective status is derived (see services::expiry)
    pub state: SpecialistState,
    pub certs: Vec<NkCert>,
    pub hired_at: NaiveDate,
}

impl NkSpecialist {
    /// Short display name: "Иванов П. С."
    pub fn short_name(&self) -> String {
        let initial = |s: &str| s.chars().next().map(|c| format!("{}.", c)).unwrap_or_default();
        format!(
            "{} {} {}",
            self.last_name,
            initial(&self.first_name),
            initial(&self.patronymic)
        )
    }
}

/// Specialist with derived status, as returned by list/get endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpecialistDetails {
    #[serde(flatten)]
    pub specialist: NkSpecialist,
    /// Worst status across all certifications, unless manually inactive
    pub status: SpecialistStatus,
}

/// Create specialist request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSpecialist {
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    pub patronymic: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    #[validate(email)]
    pub email: String,
    pub state: Option<SpecialistState>,
    #[serde(default)]
    pub certs: Vec<CreateCert>,
    pub hired_at: NaiveDate,
}

/// Update specialist request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSpecialist {
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    pub patronymic: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub state: Option<SpecialistState>,
    pub certs: Option<Vec<CreateCert>>,
    pub hired_at: Option<NaiveDate>,
}

/// Create certification request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCert {
    pub method: NkMethod,
    pub level: NkLevel,
    #[validate(length(min = 1))]
    pub cert_number: String,
    pub issued_at: NaiveDate,
    pub valid_until: NaiveDate,
    pub issued_by: String,
    #[serde(default)]
    pub objects: Vec<String>,
}

impl CreateCert {
    pub fn into_cert(self) -> NkCert {
        NkCert {
            id: Uuid::new_v4(),
            method: self.method,
            level: self.level,
            cert_number: self.cert_number,
            issued_at: self.issued_at,
            valid_until: self.valid_until,
            issued_by: self.issued_by,
            objects: self.objects,
        }
    }
}
