use crate::render::Frame;

pub fn to_markdown(frame: &Frame) -> String {
    let mut output = String::new();
    output.push_str("# Churn Prediction\n\n");
    output.push_str("## Customer Data\n\n");
    output.push_str(&format!(
        "- monthly charges: {}{}\n- tenure: {} months\n- contract: {}\n- total charges: {} {}\n\n",
        frame.currency,
        frame.monthly_charge,
        frame.tenure_months,
        frame.contract.label(),
        frame.currency,
        frame.total_charges
    ));

    output.push_str(&format!(
        "## Churn Probability\n\n{}% ({} churn risk)\n\n",
        frame.gauge, frame.status
    ));

    output.push_str("## Feature Importance\n\n");
    output.push_str("| Feature | Bar | Weight |\n|---|---|---|\n");
    for impact in &frame.impacts {
        output.push_str(&format!(
            "| {} | {:.1}% | {} |\n",
            impact.label, impact.magnitude, impact.weight
        ));
    }

    output.push_str("\n## Model Prediction Logic\n\n");
    output.push_str(&format!("> {}\n", frame.explanation));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::settled_frame;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&settled_frame());
        assert!(rendered.contains("# Churn Prediction"));
        assert!(rendered.contains("## Feature Importance"));
        assert!(rendered.contains("| Contract Impact | 87.5% | 0.42 |"));
        assert!(rendered.contains("58% (Moderate churn risk)"));
    }
}
