use crate::scoring::{self, explain};
use crate::shell::animation::{GaugeAnimation, GaugePhase, GaugeStatus, RotationPhase};
use crate::types::config::AnimationSettings;
use crate::types::scoring::{
    Assessment, ContractType, CustomerInput, FeatureImpacts, Prediction, MAX_MONTHLY_CHARGE,
    MAX_TENURE_MONTHS,
};

/// Everything the view shows, owned in one place.
#[derive(Debug, Clone)]
pub struct ViewState {
    input: CustomerInput,
    prediction: Prediction,
    impacts: FeatureImpacts,
    gauge: GaugeAnimation,
    rotation: RotationPhase,
    currency: String,
}

impl ViewState {
    /// Impacts reflect the initial inputs; the gauge starts at zero and heads
    /// for the placeholder target until the first prediction.
    pub fn new(input: CustomerInput, settings: &AnimationSettings, currency: &str) -> Self {
        let initial_target = settings.initial_target.clamp(0.0, 100.0);
        Self {
            input,
            prediction: Prediction {
                score: initial_target.round() as u8,
            },
            impacts: scoring::feature_impacts(&input),
            gauge: GaugeAnimation::new(0.0, initial_target, settings),
            rotation: RotationPhase::new(settings.rotation_step_deg),
            currency: currency.to_string(),
        }
    }

    pub fn input(&self) -> &CustomerInput {
        &self.input
    }

    pub fn prediction(&self) -> Prediction {
        self.prediction
    }

    pub fn impacts(&self) -> &FeatureImpacts {
        &self.impacts
    }

    pub fn gauge(&self) -> &GaugeAnimation {
        &self.gauge
    }

    pub fn rotation_angle(&self) -> u16 {
        self.rotation.angle()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_tenure(&mut self, months: u32) {
        self.input.tenure_months = months.min(MAX_TENURE_MONTHS);
    }

    pub fn set_monthly_charge(&mut self, charge: f64) {
        self.input.monthly_charge = charge.clamp(0.0, MAX_MONTHLY_CHARGE);
    }

    pub fn set_contract(&mut self, contract: ContractType) {
        self.input.contract = contract;
    }

    /// Replaces prediction and impacts from the current inputs and points the
    /// gauge at the new score. Returns the phase the gauge is in afterwards.
    pub fn predict(&mut self) -> GaugePhase {
        let Assessment {
            prediction,
            impacts,
        } = scoring::assess(&self.input);
        self.prediction = prediction;
        self.impacts = impacts;
        if self.gauge.retarget(f64::from(prediction.score)) {
            tracing::debug!(score = prediction.score, "gauge retargeted");
        }
        self.gauge.phase()
    }

    pub fn tick_gauge(&mut self) -> GaugePhase {
        self.gauge.step()
    }

    /// Steps the gauge until it settles. Used where there is no frame clock.
    pub fn finish_animation(&mut self) -> usize {
        let mut frames = 0;
        while self.gauge.phase() == GaugePhase::Settling {
            self.gauge.step();
            frames += 1;
        }
        frames
    }

    pub fn tick_rotation(&mut self) -> u16 {
        self.rotation.advance()
    }

    pub fn total_charges(&self) -> u64 {
        scoring::total_charges(&self.input)
    }

    pub fn status(&self) -> GaugeStatus {
        self.gauge.status()
    }

    pub fn explanation(&self) -> String {
        explain::explain(&self.input, self.prediction, &self.impacts, &self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState::new(CustomerInput::default(), &AnimationSettings::default(), "₹")
    }

    #[test]
    fn new_state_eases_toward_placeholder_target() {
        let view = state();
        assert_eq!(view.prediction().score, 72);
        assert_eq!(view.gauge().displayed(), 0.0);
        assert_eq!(view.gauge().target(), 72.0);
        assert_eq!(view.gauge().phase(), GaugePhase::Settling);
        assert_eq!(view.impacts().0[0].weight, "0.64");
        assert_eq!(view.rotation_angle(), 0);
    }

    #[test]
    fn editing_inputs_does_not_rescore() {
        let mut view = state();
        view.set_tenure(10);
        view.set_monthly_charge(20.0);
        view.set_contract(ContractType::TwoYears);
        assert_eq!(view.prediction().score, 72);
        assert_eq!(view.impacts().0[0].weight, "0.64");
        assert_eq!(view.total_charges(), 200);
    }

    #[test]
    fn setters_hold_values_within_control_bounds() {
        let mut view = state();
        view.set_tenure(500);
        view.set_monthly_charge(-3.0);
        assert_eq!(view.input().tenure_months, 72);
        assert_eq!(view.input().monthly_charge, 0.0);
    }

    #[test]
    fn predict_replaces_score_and_impacts_from_same_snapshot() {
        let mut view = state();
        view.set_tenure(72);
        view.set_monthly_charge(150.0);
        view.set_contract(ContractType::TwoYears);

        let phase = view.predict();
        let expected = scoring::assess(view.input());
        assert_eq!(view.prediction(), expected.prediction);
        assert_eq!(view.impacts(), &expected.impacts);
        assert_eq!(view.prediction().score, 64);
        assert_eq!(phase, GaugePhase::Settling);
    }

    #[test]
    fn predict_continues_from_current_displayed_value() {
        let mut view = state();
        for _ in 0..10 {
            view.tick_gauge();
        }
        let midway = view.gauge().displayed();
        assert!(midway > 0.0);

        view.predict();
        assert_eq!(view.gauge().displayed(), midway);
        assert_eq!(view.gauge().target(), 58.0);
    }

    #[test]
    fn repeated_prediction_on_settled_gauge_stays_settled() {
        let mut view = state();
        view.predict();
        while view.tick_gauge() == GaugePhase::Settling {}
        assert_eq!(view.gauge().displayed(), 58.0);
        assert_eq!(view.predict(), GaugePhase::Settled);
    }

    #[test]
    fn finish_animation_settles_on_target() {
        let mut view = state();
        let frames = view.finish_animation();
        assert_eq!(frames, 48);
        assert_eq!(view.gauge().displayed(), 72.0);
        assert_eq!(view.finish_animation(), 0);
    }

    #[test]
    fn finish_animation_terminates_at_slowest_allowed_easing() {
        use crate::types::config::{MIN_EASING_FACTOR, MIN_SNAP_THRESHOLD};

        let settings = AnimationSettings {
            easing_factor: MIN_EASING_FACTOR,
            snap_threshold: MIN_SNAP_THRESHOLD,
            initial_target: 100.0,
            ..AnimationSettings::default()
        };
        let mut view = ViewState::new(CustomerInput::default(), &settings, "₹");
        let frames = view.finish_animation();
        assert!(frames > 0 && frames < 2_000, "settled after {frames} frames");
        assert_eq!(view.gauge().displayed(), 100.0);
    }

    #[test]
    fn rotation_is_independent_of_gauge() {
        let mut view = state();
        view.tick_rotation();
        view.tick_rotation();
        assert_eq!(view.rotation_angle(), 4);
        assert_eq!(view.gauge().displayed(), 0.0);
    }

    #[test]
    fn status_follows_displayed_value() {
        let mut view = state();
        assert_eq!(view.status(), GaugeStatus::Low);
        while view.tick_gauge() == GaugePhase::Settling {}
        assert_eq!(view.status(), GaugeStatus::High);
    }

    #[test]
    fn explanation_reflects_latest_prediction() {
        let mut view = state();
        assert!(view.explanation().contains("Result is High Risk"));
        view.predict();
        assert!(view.explanation().contains("Result is Moderate Risk"));
        assert!(view.explanation().contains("36mo tenure and ₹95 fee"));
    }
}
