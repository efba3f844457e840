//! Equipment and verification models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{EquipCategory, EquipmentState, EquipmentStatus, OwnerType};

/// A verification (поверка) certificate for a measuring instrument.
/// Immutable once created; the whole collection is replaced on edit.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Verification {
    pub id: Uuid,
    /// Issue date
    pub date: NaiveDate,
    /// Expiry date of the validity window
    pub valid_until: NaiveDate,
    pub cert_number: String,
    /// Issuing metrology lab
    pub lab: String,
    /// Planned date of the next verification
    pub next_date: Option<NaiveDate>,
}

/// NDT equipment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub serial: String,
    pub inventory_no: String,
    pub category: EquipCategory,
    pub manufacturer: String,
    pub manufacture_year: i32,
    pub owner: OwnerType,
    pub department: String,
    pub responsible_person: String,
    pub location: String,
    /// Manually-set state; effective status is derived (see services::expiry)
    pub state: EquipmentState,
    pub verifications: Vec<Verification>,
    pub notes: Option<String>,
}

/// Equipment with derived status, as returned by list/get endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentDetails {
    #[serde(flatten)]
    pub equipment: Equipment,
    /// Derived from verifications and the manual state
    pub status: EquipmentStatus,
    /// Days until the latest verification expires; absent without verifications
    pub days_left: Option<i64>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1))]
    pub name: String,
    pub model: String,
    pub serial: String,
    pub inventory_no: String,
    pub category: EquipCategory,
    pub manufacturer: String,
    pub manufacture_year: i32,
    pub owner: OwnerType,
    pub department: String,
    pub responsible_person: String,
    pub location: String,
    pub state: Option<EquipmentState>,
    #[serde(default)]
    pub verifications: Vec<CreateVerification>,
    pub notes: Option<String>,
}

/// Update equipment request. Verifications, when present, replace the
/// collection wholesale.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub inventory_no: Option<String>,
    pub category: Option<EquipCategory>,
    pub manufacturer: Option<String>,
    pub manufacture_year: Option<i32>,
    pub owner: Option<OwnerType>,
    pub department: Option<String>,
    pub responsible_person: Option<String>,
    pub location: Option<String>,
    pub state: Option<EquipmentState>,
    pub verifications: Option<Vec<CreateVerification>>,
    pub notes: Option<String>,
}

/// Create verification request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateVerification {
    pub date: NaiveDate,
    pub valid_until: NaiveDate,
    #[validate(length(min = 1))]
    pub cert_number: String,
    pub lab: String,
    pub next_date: Option<NaiveDate>,
}

impl CreateVerification {
    pub fn into_verification(self) -> Verification {
        Verification {
            id: Uuid::new_v4(),
            date: self.date,
            valid_until: self.valid_until,
            cert_number: self.cert_number,
            lab: self.lab,
            next_date: self.next_date,
        }
    }
}
