use crate::render::Frame;

const BAR_CELLS: usize = 20;

/// `percent` is clamped to 0..=100 before scaling.
pub fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    let mut out = String::with_capacity(BAR_CELLS + 2);
    out.push('[');
    out.push_str(&"#".repeat(filled));
    out.push_str(&".".repeat(BAR_CELLS - filled));
    out.push(']');
    out
}

pub fn to_text(frame: &Frame) -> String {
    let mut output = String::new();
    output.push_str("Customer Data\n");
    output.push_str(&format!(
        "  Monthly Charges   {}{}\n",
        frame.currency, frame.monthly_charge
    ));
    output.push_str(&format!("  Tenure (Months)   {} mo\n", frame.tenure_months));
    output.push_str(&format!("  Contract Type     {}\n", frame.contract.label()));
    output.push_str(&format!(
        "  Total Charges     {} {}\n\n",
        frame.currency, frame.total_charges
    ));

    output.push_str(&format!(
        "Churn Probability   {:>3}% {} ring {}deg\n",
        frame.gauge,
        bar(f64::from(frame.gauge)),
        frame.rotation_angle
    ));
    output.push_str(&format!("Status: {} Churn Risk\n\n", frame.status));

    output.push_str("Feature Importance (SHAP Values)\n");
    for impact in &frame.impacts {
        output.push_str(&format!(
            "  {:<16}  {} Impact: {}\n",
            impact.label,
            bar(impact.magnitude),
            impact.weight
        ));
    }

    output.push_str("\nModel Prediction Logic\n");
    output.push_str(&format!("  \"{}\"\n", frame.explanation));
    output
}
