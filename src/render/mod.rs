pub mod json;
pub mod md;
pub mod text;

use crate::error::ChurnError;
use crate::shell::state::ViewState;
use crate::types::scoring::{ContractType, FeatureImpact};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

/// Snapshot of everything the view draws at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub tenure_months: u32,
    pub monthly_charge: f64,
    pub contract: ContractType,
    pub currency: String,
    pub total_charges: u64,
    pub score: u8,
    /// Rounded displayed gauge value.
    pub gauge: u8,
    pub status: &'static str,
    pub rotation_angle: u16,
    pub impacts: Vec<FeatureImpact>,
    pub explanation: String,
}

impl Frame {
    pub fn capture(state: &ViewState) -> Self {
        let input = state.input();
        Self {
            tenure_months: input.tenure_months,
            monthly_charge: input.monthly_charge,
            contract: input.contract,
            currency: state.currency().to_string(),
            total_charges: state.total_charges(),
            score: state.prediction().score,
            gauge: state.gauge().displayed().round() as u8,
            status: state.status().as_str(),
            rotation_angle: state.rotation_angle(),
            impacts: state.impacts().iter().cloned().collect(),
            explanation: state.explanation(),
        }
    }
}

pub fn render(frame: &Frame, format: OutputFormat) -> Result<String, ChurnError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(frame)),
        OutputFormat::Json => json::to_json(frame).map_err(ChurnError::Json),
        OutputFormat::Md => Ok(md::to_markdown(frame)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Frame;
    use crate::shell::state::ViewState;
    use crate::types::config::AnimationSettings;
    use crate::types::scoring::CustomerInput;

    /// Default inputs, predicted and fully settled.
    pub fn settled_frame() -> Frame {
        let mut state = ViewState::new(CustomerInput::default(), &AnimationSettings::default(), "₹");
        state.predict();
        state.finish_animation();
        Frame::capture(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reflects_settled_state() {
        let frame = fixtures::settled_frame();
        assert_eq!(frame.score, 58);
        assert_eq!(frame.gauge, 58);
        assert_eq!(frame.status, "Moderate");
        assert_eq!(frame.total_charges, 3420);
        assert_eq!(frame.impacts.len(), 3);
        assert_eq!(frame.impacts[0].label, "Tenure Impact");
    }

    #[test]
    fn render_dispatches_on_format() {
        let frame = fixtures::settled_frame();
        let text = render(&frame, OutputFormat::Text).expect("text should render");
        let json = render(&frame, OutputFormat::Json).expect("json should render");
        let md = render(&frame, OutputFormat::Md).expect("markdown should render");
        assert!(text.contains("Churn Probability"));
        assert!(json.contains("\"score\": 58"));
        assert!(md.starts_with("# Churn Prediction"));
    }
}
