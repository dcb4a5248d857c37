use crate::types::config::AnimationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugePhase {
    Settling,
    Settled,
}

/// Gauge label derived from the displayed value, not the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeStatus {
    High,
    Moderate,
    Low,
}

impl GaugeStatus {
    pub fn from_displayed(value: f64) -> Self {
        if value > 70.0 {
            GaugeStatus::High
        } else if value > 40.0 {
            GaugeStatus::Moderate
        } else {
            GaugeStatus::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GaugeStatus::High => "High",
            GaugeStatus::Moderate => "Moderate",
            GaugeStatus::Low => "Low",
        }
    }
}

/// Exponential easing of the displayed gauge value toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeAnimation {
    displayed: f64,
    target: f64,
    easing_factor: f64,
    snap_threshold: f64,
}

impl GaugeAnimation {
    pub fn new(displayed: f64, target: f64, settings: &AnimationSettings) -> Self {
        Self {
            displayed: displayed.clamp(0.0, 100.0),
            target: target.clamp(0.0, 100.0),
            easing_factor: settings.easing_factor,
            snap_threshold: settings.snap_threshold,
        }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> GaugePhase {
        if self.displayed == self.target {
            GaugePhase::Settled
        } else {
            GaugePhase::Settling
        }
    }

    pub fn status(&self) -> GaugeStatus {
        GaugeStatus::from_displayed(self.displayed)
    }

    /// Points the gauge at a new target, continuing from the current value.
    /// Returns true when the target actually changed.
    pub fn retarget(&mut self, target: f64) -> bool {
        let target = target.clamp(0.0, 100.0);
        if target == self.target {
            return false;
        }
        self.target = target;
        true
    }

    /// Advances one frame.
    pub fn step(&mut self) -> GaugePhase {
        if self.phase() == GaugePhase::Settled {
            return GaugePhase::Settled;
        }
        self.displayed += (self.target - self.displayed) * self.easing_factor;
        if (self.target - self.displayed).abs() < self.snap_threshold {
            self.displayed = self.target;
        }
        self.displayed = self.displayed.clamp(0.0, 100.0);
        self.phase()
    }
}

/// Cosmetic colour angle; cycles forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPhase {
    angle: u16,
    step_deg: u16,
}

impl RotationPhase {
    pub fn new(step_deg: u16) -> Self {
        Self {
            angle: 0,
            step_deg: step_deg % 360,
        }
    }

    pub fn angle(&self) -> u16 {
        self.angle
    }

    pub fn advance(&mut self) -> u16 {
        self.angle = (self.angle + self.step_deg) % 360;
        self.angle
    }
}
