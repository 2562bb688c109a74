// ==========================================
// 车辆综合评分
// ==========================================
// composite = 0.4 × fuel_cost / max_fuel_cost
//           + 0.4 × emissions / max_emissions
//           + 0.2 × (1 - age_score / 10)
// 越低越好; 归一化基数为 0 时该项记 0
// ==========================================

use crate::config::policy::{AGE_SCORE_SCALE, AGE_WEIGHT, EMISSIONS_WEIGHT, FUEL_COST_WEIGHT};
use crate::domain::vehicle::ScoreNormalization;

/// 车龄评分: clamp(10 - age_years, 0, 10)
pub fn age_score(age_years: f64) -> f64 {
    (AGE_SCORE_SCALE - age_years).clamp(0.0, AGE_SCORE_SCALE)
}

/// 综合评分
pub fn composite_score(
    fuel_cost: f64,
    emissions_kg: f64,
    age_score: f64,
    normalization: &ScoreNormalization,
) -> f64 {
    FUEL_COST_WEIGHT * normalize(fuel_cost, normalization.max_fuel_cost)
        + EMISSIONS_WEIGHT * normalize(emissions_kg, normalization.max_emissions_kg)
        + AGE_WEIGHT * (1.0 - age_score / AGE_SCORE_SCALE)
}

fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}
