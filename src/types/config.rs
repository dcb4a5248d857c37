use crate::error::ChurnError;
use crate::types::scoring::{ContractType, CustomerInput, MAX_MONTHLY_CHARGE, MAX_TENURE_MONTHS};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChurnConfig {
    pub inputs: Option<InputsConfig>,
    pub animation: Option<AnimationConfig>,
    pub display: Option<DisplayConfig>,
    pub probe: Option<ProbeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    pub tenure_months: Option<u32>,
    pub monthly_charge: Option<f64>,
    pub contract: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub frame_interval_ms: Option<u64>,
    pub rotation_interval_ms: Option<u64>,
    pub rotation_step_deg: Option<u16>,
    pub easing_factor: Option<f64>,
    pub snap_threshold: Option<f64>,
    pub initial_target: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub frame_interval: Duration,
    pub rotation_interval: Duration,
    pub rotation_step_deg: u16,
    pub easing_factor: f64,
    pub snap_threshold: f64,
    pub initial_target: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            rotation_interval: Duration::from_millis(50),
            rotation_step_deg: 2,
            easing_factor: 0.1,
            snap_threshold: 0.5,
            initial_target: 72.0,
        }
    }
}

/// Below these the per-frame step vanishes under float spacing and the
/// gauge never settles.
pub const MIN_EASING_FACTOR: f64 = 0.01;
pub const MIN_SNAP_THRESHOLD: f64 = 0.01;

pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_PROBE_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

impl ChurnConfig {
    pub fn default_inputs(&self) -> CustomerInput {
        let defaults = CustomerInput::default();
        let Some(inputs) = &self.inputs else {
            return defaults;
        };
        let contract = inputs
            .contract
            .as_deref()
            .and_then(ContractType::parse)
            .unwrap_or(defaults.contract);
        CustomerInput::new(
            inputs.tenure_months.unwrap_or(defaults.tenure_months),
            inputs.monthly_charge.unwrap_or(defaults.monthly_charge),
            contract,
        )
    }

    pub fn animation_settings(&self) -> AnimationSettings {
        let defaults = AnimationSettings::default();
        match &self.animation {
            Some(animation) => AnimationSettings {
                frame_interval: animation
                    .frame_interval_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.frame_interval),
                rotation_interval: animation
                    .rotation_interval_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.rotation_interval),
                rotation_step_deg: animation
                    .rotation_step_deg
                    .unwrap_or(defaults.rotation_step_deg),
                easing_factor: animation.easing_factor.unwrap_or(defaults.easing_factor),
                snap_threshold: animation.snap_threshold.unwrap_or(defaults.snap_threshold),
                initial_target: animation.initial_target.unwrap_or(defaults.initial_target),
            },
            None => defaults,
        }
    }

    pub fn currency(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|display| display.currency.as_deref())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn probe_endpoint(&self) -> &str {
        self.probe
            .as_ref()
            .and_then(|probe| probe.endpoint.as_deref())
            .unwrap_or(DEFAULT_PROBE_ENDPOINT)
    }

    pub fn validate(&self) -> Result<(), ChurnError> {
        if let Some(inputs) = &self.inputs {
            if let Some(tenure) = inputs.tenure_months {
                if tenure > MAX_TENURE_MONTHS {
                    return Err(ChurnError::ConfigParse(format!(
                        "inputs.tenure_months must be between 0 and {MAX_TENURE_MONTHS}"
                    )));
                }
            }
            if let Some(charge) = inputs.monthly_charge {
                if !(0.0..=MAX_MONTHLY_CHARGE).contains(&charge) {
                    return Err(ChurnError::ConfigParse(format!(
                        "inputs.monthly_charge must be between 0 and {MAX_MONTHLY_CHARGE}"
                    )));
                }
            }
            if let Some(contract) = &inputs.contract {
                if ContractType::parse(contract).is_none() {
                    return Err(ChurnError::ConfigParse(format!(
                        "unsupported inputs.contract: {contract}"
                    )));
                }
            }
        }

        if let Some(animation) = &self.animation {
            if animation.frame_interval_ms == Some(0) {
                return Err(ChurnError::ConfigParse(
                    "animation.frame_interval_ms must be greater than 0".to_string(),
                ));
            }
            if animation.rotation_interval_ms == Some(0) {
                return Err(ChurnError::ConfigParse(
                    "animation.rotation_interval_ms must be greater than 0".to_string(),
                ));
            }
            if let Some(step) = animation.rotation_step_deg {
                if step == 0 || step >= 360 {
                    return Err(ChurnError::ConfigParse(
                        "animation.rotation_step_deg must be between 1 and 359".to_string(),
                    ));
                }
            }
            if let Some(factor) = animation.easing_factor {
                if !(MIN_EASING_FACTOR..=1.0).contains(&factor) {
                    return Err(ChurnError::ConfigParse(format!(
                        "animation.easing_factor must be between {MIN_EASING_FACTOR} and 1.0"
                    )));
                }
            }
            if let Some(threshold) = animation.snap_threshold {
                if !(threshold >= MIN_SNAP_THRESHOLD && threshold.is_finite()) {
                    return Err(ChurnError::ConfigParse(format!(
                        "animation.snap_threshold must be at least {MIN_SNAP_THRESHOLD}"
                    )));
                }
            }
            if let Some(target) = animation.initial_target {
                if !(0.0..=100.0).contains(&target) {
                    return Err(ChurnError::ConfigParse(
                        "animation.initial_target must be between 0 and 100".to_string(),
                    ));
                }
            }
        }

        if let Some(endpoint) = self.probe.as_ref().and_then(|probe| probe.endpoint.as_ref()) {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ChurnError::ConfigParse(format!(
                    "probe.endpoint must be an http(s) URL: {endpoint}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_view_defaults() {
        let cfg: ChurnConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.default_inputs(), CustomerInput::default());
        assert_eq!(cfg.animation_settings(), AnimationSettings::default());
        assert_eq!(cfg.currency(), "₹");
        assert_eq!(cfg.probe_endpoint(), "http://127.0.0.1:8000/predict");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[inputs]
tenure_months = 12
monthly_charge = 70.5
contract = "1 Year"

[animation]
frame_interval_ms = 33
rotation_interval_ms = 100
rotation_step_deg = 5
easing_factor = 0.2
snap_threshold = 0.25
initial_target = 0

[display]
currency = "$"

[probe]
endpoint = "http://localhost:9000/predict"
"#;
        let cfg: ChurnConfig = toml::from_str(toml_str).expect("full config should parse");
        cfg.validate().expect("full config should validate");

        let inputs = cfg.default_inputs();
        assert_eq!(inputs.tenure_months, 12);
        assert_eq!(inputs.monthly_charge, 70.5);
        assert_eq!(inputs.contract, ContractType::OneYear);

        let animation = cfg.animation_settings();
        assert_eq!(animation.frame_interval, Duration::from_millis(33));
        assert_eq!(animation.rotation_interval, Duration::from_millis(100));
        assert_eq!(animation.rotation_step_deg, 5);
        assert_eq!(animation.initial_target, 0.0);
        assert_eq!(cfg.currency(), "$");
        assert_eq!(cfg.probe_endpoint(), "http://localhost:9000/predict");
    }

    #[test]
    fn validate_rejects_out_of_range_tenure() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[inputs]
tenure_months = 80
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("tenure above 72 should fail");
        assert!(err.to_string().contains("inputs.tenure_months"));
    }

    #[test]
    fn validate_rejects_unknown_contract() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[inputs]
contract = "weekly"
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ChurnError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_zero_rotation_interval() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[animation]
rotation_interval_ms = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_easing_factor_outside_unit_interval() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[animation]
easing_factor = 1.5
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_easing_factor_too_small_to_settle() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[animation]
easing_factor = 1e-17
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("tiny easing factor should be rejected");
        assert!(err.to_string().contains("animation.easing_factor"));
    }

    #[test]
    fn validate_rejects_snap_threshold_below_float_spacing() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[animation]
snap_threshold = 1e-300
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("tiny snap threshold should be rejected");
        assert!(err.to_string().contains("animation.snap_threshold"));
    }

    #[test]
    fn validate_accepts_slowest_allowed_animation() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[animation]
easing_factor = 0.01
snap_threshold = 0.01
"#,
        )
        .expect("config should parse");
        cfg.validate().expect("lower bounds should be accepted");
    }

    #[test]
    fn validate_rejects_non_http_endpoint() {
        let cfg: ChurnConfig = toml::from_str(
            r#"
[probe]
endpoint = "ftp://example.com/predict"
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
