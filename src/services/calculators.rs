//! Engineering calculators
//!
//! Three independent pure computation units. Out-of-domain input is
//! signalled uniformly by returning `None`; they never panic or error.
//! The residual-life calculator additionally keeps a capped history of
//! recent results for recall.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::calculator::{
    CorrosionMeasurement, CorrosionRateResult, CorrosionTrend, ResidualHistoryEntry,
    ResidualLifeInput, ResidualLifeResult, ResidualVerdict, WallThicknessInput,
    WallThicknessResult, WallVerdict,
};

/// Inter-inspection interval regulatory cap, years (РД 09-539-03)
const INSPECTION_INTERVAL_CAP: i64 = 4;

/// Forecast table length cap
const FORECAST_MAX_YEARS: i64 = 10;

/// Residual-life calculation history depth
const HISTORY_CAP: usize = 5;

fn residual_verdict(residual_life: f64) -> (ResidualVerdict, &'static str) {
    if residual_life < 2.0 {
        (
            ResidualVerdict::Critical,
            "Критическое состояние. Требуется немедленное внеплановое обследование или вывод из эксплуатации.",
        )
    } else if residual_life < 5.0 {
        (
            ResidualVerdict::Warning,
            "Повышенный износ. Рекомендуется сокращённый межинспекционный интервал.",
        )
    } else {
        (
            ResidualVerdict::Ok,
            "Состояние удовлетворительное. Плановое обследование в соответствии с графиком.",
        )
    }
}

/// Residual-life estimate per РД 09-539-03: years until the wall reaches
/// the minimum allowed thickness at a linear corrosion rate.
///
/// Rejects (returns `None`) when the rate is non-positive or the actual
/// thickness does not exceed the minimum.
pub fn residual_life(input: &ResidualLifeInput) -> Option<ResidualLifeResult> {
    let t = input.wall_actual;
    let t_min = input.wall_min;
    let v = input.corrosion_rate;

    if !t.is_finite() || !t_min.is_finite() || !v.is_finite() {
        return None;
    }
    if v <= 0.0 || t <= t_min {
        return None;
    }

    let residual = (t - t_min) / v;
    let remaining_percent = if input.design_life > 0 {
        (residual / input.design_life as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        return None;
    };
    // Half the residual life, capped by regulation.
    let next_inspection = ((residual * 0.5).floor() as i64).min(INSPECTION_INTERVAL_CAP);
    let (verdict, verdict_text) = residual_verdict(residual);

    let horizon = (residual.ceil() as i64 + 1).min(FORECAST_MAX_YEARS);
    let predicted_thickness = (0..horizon)
        .map(|i| {
            let year = input.last_inspection + i as i32;
            let thickness = (t - v * i as f64).max(0.0);
            (year, thickness)
        })
        .collect();

    Some(ResidualLifeResult {
        residual_life: residual,
        next_inspection,
        remaining_percent,
        verdict,
        verdict_text,
        predicted_thickness,
    })
}

/// Round a thickness up to a standard plate/pipe gauge: 0.5 mm steps up
/// to 4 mm, whole millimetres up to 10 mm, even millimetres above.
fn round_up_thickness(t: f64) -> f64 {
    if t <= 4.0 {
        (t * 2.0).ceil() / 2.0
    } else if t <= 10.0 {
        t.ceil()
    } else {
        (t / 2.0).ceil() * 2.0
    }
}

/// Minimum wall thickness under pressure per ГОСТ 32388-2013:
/// s_p = P·D / (2·[σ]·φ − P).
///
/// Rejects when σ ≤ 0, φ outside (0, 1], or the formula collapses to a
/// non-positive thickness (infeasible design point).
pub fn wall_thickness(input: &WallThicknessInput) -> Option<WallThicknessResult> {
    let p = input.pressure;
    let d = input.diameter;
    let sigma = input.allow_stress;
    let phi = input.weld_coeff;
    let c = input.add_allowance;

    if ![p, d, sigma, phi, c].iter().all(|x| x.is_finite()) {
        return None;
    }
    if sigma <= 0.0 || phi <= 0.0 || phi > 1.0 {
        return None;
    }

    let calc_thickness = p * d / (2.0 * sigma * phi - p);
    if calc_thickness <= 0.0 {
        return None;
    }

    let min_thickness = calc_thickness + c;
    let rounded_thickness = round_up_thickness(min_thickness);
    // Loading ratio against the as-built (rounded) thickness, not the raw one.
    let actual_ratio = p * (d + 2.0 * rounded_thickness) / (2.0 * sigma * phi * rounded_thickness);
    let verdict = if actual_ratio > 0.9 {
        WallVerdict::Warning
    } else {
        WallVerdict::Ok
    };

    Some(WallThicknessResult {
        calc_thickness,
        min_thickness,
        rounded_thickness,
        actual_ratio,
        verdict,
    })
}

fn corrosion_trend(rate: f64) -> (CorrosionTrend, &'static str) {
    if rate > 0.3 {
        (CorrosionTrend::High, "Высокая (>0.3 мм/год)")
    } else if rate > 0.1 {
        (CorrosionTrend::Moderate, "Умеренная (0.1–0.3 мм/год)")
    } else {
        (CorrosionTrend::Low, "Низкая (<0.1 мм/год)")
    }
}

/// Corrosion rate from thickness measurements per РД 03-421-01: wall loss
/// between the earliest and latest measurement divided by the elapsed
/// years, floored at zero.
///
/// Rows with missing fields are filtered out; fewer than two valid points
/// (or all points in one year) produce no result.
pub fn corrosion_rate(measurements: &[CorrosionMeasurement]) -> Option<CorrosionRateResult> {
    let mut valid: Vec<(i32, f64)> = measurements
        .iter()
        .filter_map(|m| match (m.year, m.thickness) {
            (Some(y), Some(t)) if t.is_finite() => Some((y, t)),
            _ => None,
        })
        .collect();

    if valid.len() < 2 {
        return None;
    }
    valid.sort_by_key(|&(year, _)| year);

    let (first_year, first_t) = valid[0];
    let (last_year, last_t) = valid[valid.len() - 1];
    if last_year == first_year {
        return None;
    }

    let rate = ((first_t - last_t) / (last_year - first_year) as f64).max(0.0);
    let (trend, trend_text) = corrosion_trend(rate);

    Some(CorrosionRateResult {
        rate,
        trend,
        trend_text,
    })
}

/// Calculator service: stateless computations plus the residual-life
/// result history (last 5, most recent first).
#[derive(Clone, Default)]
pub struct CalculatorsService {
    history: Arc<RwLock<Vec<ResidualHistoryEntry>>>,
}

impl CalculatorsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the residual-life estimator and record the result in history
    pub async fn residual_life(&self, input: ResidualLifeInput) -> Option<ResidualLifeResult> {
        let result = residual_life(&input)?;
        let entry = ResidualHistoryEntry {
            label: format!("{}мм · {}мм/год", input.wall_actual, input.corrosion_rate),
            input,
            result: result.clone(),
        };
        let mut history = self.history.write().await;
        history.insert(0, entry);
        history.truncate(HISTORY_CAP);
        Some(result)
    }

    /// Recent residual-life calculations, most recent first
    pub async fn residual_history(&self) -> Vec<ResidualHistoryEntry> {
        self.history.read().await.clone()
    }

    pub fn wall_thickness(&self, input: &WallThicknessInput) -> Option<WallThicknessResult> {
        wall_thickness(input)
    }

    pub fn corrosion_rate(
        &self,
        measurements: &[CorrosionMeasurement],
    ) -> Option<CorrosionRateResult> {
        corrosion_rate(measurements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual_input(t: f64, t_min: f64, v: f64, design_life: i32) -> ResidualLifeInput {
        ResidualLifeInput {
            wall_actual: t,
            wall_min: t_min,
            corrosion_rate: v,
            service_start: 2010,
            last_inspection: 2024,
            design_life,
        }
    }

    #[test]
    fn residual_life_literal_scenario() {
        let r = residual_life(&residual_input(8.2, 4.5, 0.15, 20)).unwrap();
        assert!((r.residual_life - (8.2 - 4.5) / 0.15).abs() < 1e-9);
        assert!((r.residual_life - 24.666666).abs() < 1e-3);
        assert_eq!(r.next_inspection, 4);
        assert_eq!(r.verdict, ResidualVerdict::Ok);
        assert!((r.remaining_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn residual_life_rejects_thin_wall() {
        assert!(residual_life(&residual_input(4.0, 4.5, 0.15, 20)).is_none());
        // t == t_min is also infeasible
        assert!(residual_life(&residual_input(4.5, 4.5, 0.15, 20)).is_none());
    }

    #[test]
    fn residual_life_rejects_non_positive_rate() {
        assert!(residual_life(&residual_input(8.2, 4.5, 0.0, 20)).is_none());
        assert!(residual_life(&residual_input(8.2, 4.5, -0.1, 20)).is_none());
    }

    #[test]
    fn residual_life_verdict_thresholds() {
        // residual = 1.5 years
        let r = residual_life(&residual_input(5.0, 4.7, 0.2, 20)).unwrap();
        assert_eq!(r.verdict, ResidualVerdict::Critical);
        // residual = 3 years
        let r = residual_life(&residual_input(5.1, 4.5, 0.2, 20)).unwrap();
        assert_eq!(r.verdict, ResidualVerdict::Warning);
    }

    #[test]
    fn residual_life_forecast_is_linear_and_capped() {
        let r = residual_life(&residual_input(8.2, 4.5, 0.15, 20)).unwrap();
        // ceil(24.67)+1 = 26, capped at 10 entries
        assert_eq!(r.predicted_thickness.len(), 10);
        assert_eq!(r.predicted_thickness[0], (2024, 8.2));
        let (year, t) = r.predicted_thickness[9];
        assert_eq!(year, 2033);
        assert!((t - (8.2 - 0.15 * 9.0)).abs() < 1e-9);
    }

    #[test]
    fn residual_life_forecast_clamps_at_zero() {
        // residual = 1 year: thickness would go negative fast at v=2.0
        let r = residual_life(&residual_input(4.0, 2.0, 2.0, 20)).unwrap();
        assert!(r.predicted_thickness.iter().all(|&(_, t)| t >= 0.0));
    }

    #[test]
    fn wall_thickness_literal_scenario() {
        let r = wall_thickness(&WallThicknessInput {
            pressure: 1.6,
            diameter: 200.0,
            allow_stress: 147.0,
            weld_coeff: 1.0,
            add_allowance: 1.0,
        })
        .unwrap();
        assert!((r.calc_thickness - 320.0 / 292.4).abs() < 1e-9);
        assert!((r.min_thickness - (320.0 / 292.4 + 1.0)).abs() < 1e-9);
        assert!((r.rounded_thickness - 2.5).abs() < 1e-9);
        assert!(r.actual_ratio < 0.9);
        assert_eq!(r.verdict, WallVerdict::Ok);
    }

    #[test]
    fn wall_thickness_rejects_bad_coefficients() {
        let mut input = WallThicknessInput {
            pressure: 1.6,
            diameter: 200.0,
            allow_stress: 147.0,
            weld_coeff: 1.0,
            add_allowance: 1.0,
        };
        input.weld_coeff = 1.1;
        assert!(wall_thickness(&input).is_none());
        input.weld_coeff = 0.0;
        assert!(wall_thickness(&input).is_none());
        input.weld_coeff = 1.0;
        input.allow_stress = 0.0;
        assert!(wall_thickness(&input).is_none());
    }

    #[test]
    fn wall_thickness_rejects_denominator_collapse() {
        // 2σφ − P ≤ 0 makes the formula meaningless
        let r = wall_thickness(&WallThicknessInput {
            pressure: 300.0,
            diameter: 200.0,
            allow_stress: 147.0,
            weld_coeff: 1.0,
            add_allowance: 1.0,
        });
        assert!(r.is_none());
    }

    #[test]
    fn rounding_tiers() {
        assert_eq!(round_up_thickness(2.0951), 2.5);
        assert_eq!(round_up_thickness(3.1), 3.5);
        assert_eq!(round_up_thickness(4.0), 4.0);
        assert_eq!(round_up_thickness(4.2), 5.0);
        assert_eq!(round_up_thickness(9.1), 10.0);
        assert_eq!(round_up_thickness(10.5), 12.0);
        assert_eq!(round_up_thickness(13.0), 14.0);
    }

    fn measurement(year: i32, thickness: f64) -> CorrosionMeasurement {
        CorrosionMeasurement {
            year: Some(year),
            thickness: Some(thickness),
        }
    }

    #[test]
    fn corrosion_rate_literal_scenario() {
        let r = corrosion_rate(&[measurement(2021, 8.2), measurement(2024, 7.1)]).unwrap();
        assert!((r.rate - 1.1 / 3.0).abs() < 1e-9);
        assert_eq!(r.trend, CorrosionTrend::High);
        assert_eq!(r.trend_text, "Высокая (>0.3 мм/год)");
    }

    #[test]
    fn corrosion_rate_sorts_by_year() {
        let r = corrosion_rate(&[measurement(2024, 7.1), measurement(2021, 8.2)]).unwrap();
        assert!((r.rate - 1.1 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn corrosion_rate_insufficient_data() {
        assert!(corrosion_rate(&[measurement(2021, 8.2)]).is_none());
        // Blank rows are filtered before the count check
        let blank = CorrosionMeasurement {
            year: None,
            thickness: None,
        };
        assert!(corrosion_rate(&[measurement(2021, 8.2), blank]).is_none());
    }

    #[test]
    fn corrosion_rate_floors_negative_at_zero() {
        // Thickness increasing between measurements
        let r = corrosion_rate(&[measurement(2021, 7.0), measurement(2024, 7.5)]).unwrap();
        assert_eq!(r.rate, 0.0);
        assert_eq!(r.trend, CorrosionTrend::Low);
    }

    #[test]
    fn history_is_capped_most_recent_first() {
        let service = CalculatorsService::new();
        tokio_test::block_on(async {
            for i in 0..7 {
                let input = residual_input(8.0 + i as f64, 4.5, 0.15, 20);
                service.residual_life(input).await.unwrap();
            }
            let history = service.residual_history().await;
            assert_eq!(history.len(), 5);
            assert_eq!(history[0].input.wall_actual, 14.0);
            assert_eq!(history[4].input.wall_actual, 10.0);
        });
    }
}
