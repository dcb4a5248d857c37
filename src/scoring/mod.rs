//! Heuristic churn scoring.
//!
//! Every function here is pure: the same input always produces the same
//! score, magnitudes and weight strings.

pub mod explain;

use crate::types::scoring::{
    Assessment, CustomerInput, FeatureImpact, FeatureImpacts, FeatureKind, Prediction,
};

const TENURE_COEFFICIENT: f64 = 0.4;
const CHARGE_COEFFICIENT: f64 = 0.2;
const MAX_BAR_MAGNITUDE: f64 = 95.0;

/// Unrounded linear combination behind the score.
pub fn raw_score(input: &CustomerInput) -> f64 {
    f64::from(input.tenure_months) * TENURE_COEFFICIENT
        + input.monthly_charge * CHARGE_COEFFICIENT
        + f64::from(input.contract.contract_value())
}

pub fn score(input: &CustomerInput) -> Prediction {
    // Inputs are non-negative, so half-away-from-zero rounding is half-up.
    let score = raw_score(input).round().clamp(0.0, 100.0) as u8;
    Prediction { score }
}

pub fn feature_impacts(input: &CustomerInput) -> FeatureImpacts {
    let tenure = f64::from(input.tenure_months);
    let charge = input.monthly_charge;
    let contract = f64::from(input.contract.contract_value());

    FeatureImpacts([
        FeatureImpact::new(
            FeatureKind::Tenure,
            (tenure * 1.3).min(MAX_BAR_MAGNITUDE),
            format_weight(0.4 + tenure / 150.0),
        ),
        FeatureImpact::new(
            FeatureKind::Pricing,
            (charge * 0.6).min(MAX_BAR_MAGNITUDE),
            format_weight(0.2 + charge / 400.0),
        ),
        // Left unclamped; the largest contract value keeps it at 87.5.
        FeatureImpact::new(
            FeatureKind::Contract,
            contract * 3.5,
            format_weight(contract / 60.0),
        ),
    ])
}

/// Scores and impacts taken from the same snapshot of the inputs.
pub fn assess(input: &CustomerInput) -> Assessment {
    Assessment {
        prediction: score(input),
        impacts: feature_impacts(input),
    }
}

pub fn total_charges(input: &CustomerInput) -> u64 {
    (input.monthly_charge * f64::from(input.tenure_months)).round() as u64
}

/// Fixed two-decimal formatting of the exact binary value, so 0.245 (stored
/// just below the half) becomes "0.24".
pub fn format_weight(value: f64) -> String {
    format!("{value:.2}")
}
