//! Engineering calculator inputs and results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Residual life (РД 09-539-03)
// ---------------------------------------------------------------------------

/// Residual-life estimator inputs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResidualLifeInput {
    /// Actual wall thickness, mm
    pub wall_actual: f64,
    /// Minimum allowed wall thickness, mm
    pub wall_min: f64,
    /// Corrosion rate, mm/year
    pub corrosion_rate: f64,
    /// Year the equipment entered service
    pub service_start: i32,
    /// Year of the last inspection
    pub last_inspection: i32,
    /// Design service life, years
    pub design_life: i32,
}

/// Residual-life verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResidualVerdict {
    Ok,
    Warning,
    Critical,
}

/// Residual-life estimator result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResidualLifeResult {
    /// Estimated residual life, years
    pub residual_life: f64,
    /// Recommended inter-inspection interval, years (half the residual
    /// life, capped at 4 per РД 09-539-03)
    pub next_inspection: i64,
    /// Residual life as a share of the design life, clamped to 0..=100
    pub remaining_percent: f64,
    pub verdict: ResidualVerdict,
    #[schema(value_type = String)]
    pub verdict_text: &'static str,
    /// Linear wall-thinning forecast: (calendar year, predicted thickness mm)
    #[schema(value_type = Vec<Object>)]
    pub predicted_thickness: Vec<(i32, f64)>,
}

/// A recalled residual-life computation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResidualHistoryEntry {
    /// Short display label, e.g. "8.2мм · 0.15мм/год"
    pub label: String,
    pub input: ResidualLifeInput,
    pub result: ResidualLifeResult,
}

// ---------------------------------------------------------------------------
// Wall thickness (ГОСТ 32388-2013)
// ---------------------------------------------------------------------------

/// Pressure wall-thickness sizing inputs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WallThicknessInput {
    /// Working pressure P, MPa
    pub pressure: f64,
    /// Internal diameter D, mm
    pub diameter: f64,
    /// Allowable stress [σ], MPa
    pub allow_stress: f64,
    /// Weld coefficient φ, 0 < φ ≤ 1
    pub weld_coeff: f64,
    /// Additive allowance c, mm
    pub add_allowance: f64,
}

/// Wall-thickness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WallVerdict {
    Ok,
    Warning,
}

/// Wall-thickness sizing result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WallThicknessResult {
    /// Calculated thickness s_p = P·D / (2·[σ]·φ − P), mm
    pub calc_thickness: f64,
    /// Calculated thickness plus the additive allowance, mm
    pub min_thickness: f64,
    /// Rounded up to a standard plate/pipe gauge, mm
    pub rounded_thickness: f64,
    /// Loading ratio recomputed against the rounded (as-built) thickness
    pub actual_ratio: f64,
    pub verdict: WallVerdict,
}

// ---------------------------------------------------------------------------
// Corrosion rate (РД 03-421-01)
// ---------------------------------------------------------------------------

/// One thickness measurement row. Blank form rows arrive with missing
/// fields and are filtered out before computation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CorrosionMeasurement {
    pub year: Option<i32>,
    /// Wall thickness, mm
    pub thickness: Option<f64>,
}

/// Corrosion intensity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CorrosionTrend {
    Low,
    Moderate,
    High,
}

/// Corrosion-rate result
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CorrosionRateResult {
    /// Corrosion rate, mm/year; floored at 0
    pub rate: f64,
    pub trend: CorrosionTrend,
    #[schema(value_type = String)]
    pub trend_text: &'static str,
}
