use serde::{Deserialize, Serialize};

pub const MAX_TENURE_MONTHS: u32 = 72;
pub const MAX_MONTHLY_CHARGE: f64 = 150.0;

/// Billing commitment category selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Month-to-Month", alias = "month-to-month")]
    MonthToMonth,
    #[serde(rename = "1 Year", alias = "one-year")]
    OneYear,
    #[serde(rename = "2 Years", alias = "two-years")]
    TwoYears,
}

impl ContractType {
    /// Heuristic contribution of the contract category to the score.
    pub fn contract_value(self) -> u32 {
        match self {
            ContractType::MonthToMonth => 25,
            ContractType::OneYear => 10,
            ContractType::TwoYears => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractType::MonthToMonth => "Month-to-Month",
            ContractType::OneYear => "1 Year",
            ContractType::TwoYears => "2 Years",
        }
    }

    /// Accepts both the display labels and the kebab-case command names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "month-to-month" | "mtm" | "monthly" => Some(ContractType::MonthToMonth),
            "1 year" | "one-year" | "1y" => Some(ContractType::OneYear),
            "2 years" | "two-years" | "2y" => Some(ContractType::TwoYears),
            _ => None,
        }
    }
}

/// Raw form inputs. Values are bounded by the controls that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomerInput {
    pub tenure_months: u32,
    pub monthly_charge: f64,
    pub contract: ContractType,
}

impl CustomerInput {
    pub fn new(tenure_months: u32, monthly_charge: f64, contract: ContractType) -> Self {
        Self {
            tenure_months: tenure_months.min(MAX_TENURE_MONTHS),
            monthly_charge: monthly_charge.clamp(0.0, MAX_MONTHLY_CHARGE),
            contract,
        }
    }
}

impl Default for CustomerInput {
    fn default() -> Self {
        Self::new(36, 95.0, ContractType::MonthToMonth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub score: u8,
}

/// Declaration order doubles as the tie-break order for explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureKind {
    Tenure,
    Pricing,
    Contract,
}

impl FeatureKind {
    pub fn label(self) -> &'static str {
        match self {
            FeatureKind::Tenure => "Tenure Impact",
            FeatureKind::Pricing => "Pricing Impact",
            FeatureKind::Contract => "Contract Impact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImpact {
    pub kind: FeatureKind,
    pub label: &'static str,
    /// Bar width in percent.
    pub magnitude: f64,
    /// Two-decimal formatted weight.
    pub weight: String,
}

impl FeatureImpact {
    pub fn new(kind: FeatureKind, magnitude: f64, weight: String) -> Self {
        Self {
            kind,
            label: kind.label(),
            magnitude,
            weight,
        }
    }

    /// Numeric value of the formatted weight; equal strings compare equal.
    pub fn weight_value(&self) -> f64 {
        self.weight.parse().unwrap_or(0.0)
    }
}

/// Always tenure, pricing, contract in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImpacts(pub [FeatureImpact; 3]);

impl FeatureImpacts {
    pub fn iter(&self) -> impl Iterator<Item = &FeatureImpact> {
        self.0.iter()
    }
}

/// Score and impacts computed from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub prediction: Prediction,
    pub impacts: FeatureImpacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_values_follow_commitment_length() {
        assert_eq!(ContractType::MonthToMonth.contract_value(), 25);
        assert_eq!(ContractType::OneYear.contract_value(), 10);
        assert_eq!(ContractType::TwoYears.contract_value(), 5);
    }

    #[test]
    fn contract_parse_accepts_labels_and_command_names() {
        assert_eq!(ContractType::parse("1 Year"), Some(ContractType::OneYear));
        assert_eq!(
            ContractType::parse("two-years"),
            Some(ContractType::TwoYears)
        );
        assert_eq!(
            ContractType::parse(" Month-to-Month "),
            Some(ContractType::MonthToMonth)
        );
        assert_eq!(ContractType::parse("weekly"), None);
    }

    #[test]
    fn contract_serializes_with_display_label() {
        let json = serde_json::to_string(&ContractType::OneYear).expect("contract should serialize");
        assert_eq!(json, "\"1 Year\"");
    }

    #[test]
    fn customer_input_is_held_within_control_bounds() {
        let input = CustomerInput::new(90, 200.0, ContractType::OneYear);
        assert_eq!(input.tenure_months, MAX_TENURE_MONTHS);
        assert_eq!(input.monthly_charge, MAX_MONTHLY_CHARGE);
    }
}
