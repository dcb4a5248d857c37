use crate::error::ChurnError;
use crate::types::scoring::{ContractType, MAX_MONTHLY_CHARGE, MAX_TENURE_MONTHS};

/// User interactions the view reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    SetTenure(u32),
    SetMonthlyCharge(f64),
    SetContract(ContractType),
    Predict,
    Quit,
}

/// Parses one line of demo input. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ViewEvent>, ChurnError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let event = match verb.to_ascii_lowercase().as_str() {
        "tenure" => {
            let months: u32 = arg.parse().map_err(|_| {
                ChurnError::InvalidCommand(format!("tenure expects whole months, got '{arg}'"))
            })?;
            if months > MAX_TENURE_MONTHS {
                return Err(ChurnError::InvalidCommand(format!(
                    "tenure must be between 0 and {MAX_TENURE_MONTHS}"
                )));
            }
            ViewEvent::SetTenure(months)
        }
        "charge" | "monthly" => {
            let charge: f64 = arg.parse().map_err(|_| {
                ChurnError::InvalidCommand(format!("charge expects a number, got '{arg}'"))
            })?;
            if !(0.0..=MAX_MONTHLY_CHARGE).contains(&charge) {
                return Err(ChurnError::InvalidCommand(format!(
                    "charge must be between 0 and {MAX_MONTHLY_CHARGE}"
                )));
            }
            ViewEvent::SetMonthlyCharge(charge)
        }
        "contract" => {
            let contract = ContractType::parse(arg).ok_or_else(|| {
                ChurnError::InvalidCommand(format!(
                    "contract must be month-to-month, one-year or two-years, got '{arg}'"
                ))
            })?;
            ViewEvent::SetContract(contract)
        }
        "predict" => ViewEvent::Predict,
        "quit" | "exit" => ViewEvent::Quit,
        other => {
            return Err(ChurnError::InvalidCommand(format!(
                "unknown command '{other}'"
            )))
        }
    };
    Ok(Some(event))
}
