use crate::types::scoring::{CustomerInput, FeatureImpact, FeatureImpacts, Prediction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HighRisk,
    ModerateRisk,
    Stable,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            Verdict::HighRisk
        } else if score > 40 {
            Verdict::ModerateRisk
        } else {
            Verdict::Stable
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::HighRisk => "High Risk",
            Verdict::ModerateRisk => "Moderate Risk",
            Verdict::Stable => "Stable",
        }
    }
}

/// Impacts ordered by weight, heaviest first. Ties keep declaration order.
pub fn rank(impacts: &FeatureImpacts) -> [&FeatureImpact; 3] {
    let mut ranked = [&impacts.0[0], &impacts.0[1], &impacts.0[2]];
    ranked.sort_by(|a, b| b.weight_value().total_cmp(&a.weight_value()));
    ranked
}

pub fn explain(
    input: &CustomerInput,
    prediction: Prediction,
    impacts: &FeatureImpacts,
    currency: &str,
) -> String {
    let [top, mid, low] = rank(impacts);
    let verdict = Verdict::from_score(prediction.score);

    format!(
        "Model Logic: Result is {}. Predominantly weighted by {} ({}), compounded by {} ({}). \
         While {} shows minimal pull ({}), the current {}mo tenure and {}{} fee intersection \
         defines this boundary.",
        verdict.as_str(),
        top.label,
        top.weight,
        mid.label,
        mid.weight,
        low.label,
        low.weight,
        input.tenure_months,
        currency,
        input.monthly_charge,
    )
}
