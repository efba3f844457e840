//! Shared domain enums
//!
//! Status enums are domain-pure: Russian presentation labels live in the
//! export/presentation layer, not here. `Display` impls print domain codes
//! (method abbreviations, certification levels), which are data, not labels.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// NDT methods and certification levels
// ---------------------------------------------------------------------------

/// Non-destructive testing method codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum NkMethod {
    /// УЗТ — ultrasonic thickness measurement
    #[serde(rename = "УЗТ")]
    Uzt,
    /// УЗК — ultrasonic testing
    #[serde(rename = "УЗК")]
    Uzk,
    /// МПД — magnetic particle testing
    #[serde(rename = "МПД")]
    Mpd,
    /// ВТД — eddy current testing
    #[serde(rename = "ВТД")]
    Vtd,
    /// ЦД — dye penetrant testing
    #[serde(rename = "ЦД")]
    Cd,
    /// ВИК — visual and measuring inspection
    #[serde(rename = "ВИК")]
    Vik,
    /// РГК — radiographic testing
    #[serde(rename = "РГК")]
    Rgk,
    /// АЭ — acoustic emission
    #[serde(rename = "АЭ")]
    Ae,
}

impl std::fmt::Display for NkMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            NkMethod::Uzt => "УЗТ",
            NkMethod::Uzk => "УЗК",
            NkMethod::Mpd => "МПД",
            NkMethod::Vtd => "ВТД",
            NkMethod::Cd => "ЦД",
            NkMethod::Vik => "ВИК",
            NkMethod::Rgk => "РГК",
            NkMethod::Ae => "АЭ",
        };
        write!(f, "{}", code)
    }
}

/// Equipment category: an NDT method code, or other instrumentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EquipCategory {
    #[serde(rename = "УЗТ")]
    Uzt,
    #[serde(rename = "УЗК")]
    Uzk,
    #[serde(rename = "МПД")]
    Mpd,
    #[serde(rename = "РГК")]
    Rgk,
    #[serde(rename = "ВТД")]
    Vtd,
    #[serde(rename = "ЦД")]
    Cd,
    #[serde(rename = "ВИК")]
    Vik,
    #[serde(rename = "АЭ")]
    Ae,
    #[serde(rename = "Прочее")]
    Other,
}

impl std::fmt::Display for EquipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            EquipCategory::Uzt => "УЗТ",
            EquipCategory::Uzk => "УЗК",
            EquipCategory::Mpd => "МПД",
            EquipCategory::Rgk => "РГК",
            EquipCategory::Vtd => "ВТД",
            EquipCategory::Cd => "ЦД",
            EquipCategory::Vik => "ВИК",
            EquipCategory::Ae => "АЭ",
            EquipCategory::Other => "Прочее",
        };
        write!(f, "{}", code)
    }
}

/// NDT specialist proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum NkLevel {
    I,
    II,
    III,
}

impl std::fmt::Display for NkLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NkLevel::I => "I",
            NkLevel::II => "II",
            NkLevel::III => "III",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Equipment ownership mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    Own,
    Rent,
    Leasing,
}

// ---------------------------------------------------------------------------
// Manual states vs derived statuses
// ---------------------------------------------------------------------------

/// Manually-set equipment state. Not the effective status: that is derived
/// from verifications, except Repair/Decommissioned which always win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentState {
    Active,
    Repair,
    Decommissioned,
}

/// Derived equipment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Active,
    Expiring,
    Overdue,
    Repair,
    Decommissioned,
}

/// Manually-set specialist state. Inactive always wins over derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistState {
    Active,
    Inactive,
}

/// Derived specialist status: the worst status across all certificates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistStatus {
    Active,
    Expiring,
    Expired,
    Inactive,
}

/// Tri-state classification of a dated certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Valid,
    Expiring,
    Overdue,
}

// ---------------------------------------------------------------------------
// Workflow statuses (pure CRUD rows, no derived computation)
// ---------------------------------------------------------------------------

/// Expertise workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseStatus {
    Draft,
    Review,
    Signed,
    Rejected,
}

/// Technical-diagnostics report workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TdStatus {
    Draft,
    Review,
    Approved,
    Issued,
    Rejected,
}

/// Registry entry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistryStatus {
    Signed,
    Registered,
    Rejected,
    Expired,
}

/// Rostechnadzor registration state of a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RtnStatus {
    Pending,
    Registered,
    Rejected,
}
