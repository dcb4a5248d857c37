use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "churn-gauge",
    version,
    about = "Churn risk demo: heuristic scoring with an animated terminal gauge"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file layered over churn.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one customer and print the settled view
    Predict(PredictCommand),
    /// Mount the animated view and drive it from stdin commands
    Demo(DemoCommand),
    /// Send one sample request to a prediction backend
    Probe(ProbeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Contract {
    MonthToMonth,
    OneYear,
    TwoYears,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Args)]
pub struct PredictCommand {
    /// Tenure in months (0-72); defaults to the configured input
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=72))]
    pub tenure: Option<u32>,
    /// Monthly charge (0-150); defaults to the configured input
    #[arg(long, value_parser = parse_monthly_charge)]
    pub monthly_charge: Option<f64>,
    #[arg(long, value_enum)]
    pub contract: Option<Contract>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DemoCommand {
    /// Redraw on every frame instead of only on input and settle
    #[arg(long)]
    pub every_frame: bool,
}

#[derive(Args)]
pub struct ProbeCommand {
    /// Backend URL; defaults to the configured endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Defaults to Male
    #[arg(long)]
    pub gender: Option<String>,
    /// Defaults to No
    #[arg(long)]
    pub partner: Option<String>,
    /// Defaults to 12
    #[arg(long)]
    pub tenure: Option<u32>,
    /// Defaults to 70.0
    #[arg(long)]
    pub monthly_charges: Option<f64>,
    /// Defaults to Month-to-Month
    #[arg(long)]
    pub contract: Option<String>,
    /// Defaults to DSL
    #[arg(long)]
    pub internet_service: Option<String>,
    /// Defaults to No
    #[arg(long)]
    pub online_security: Option<String>,
    /// Defaults to No
    #[arg(long)]
    pub tech_support: Option<String>,
}

fn parse_monthly_charge(raw: &str) -> Result<f64, String> {
    let charge: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !(0.0..=150.0).contains(&charge) {
        return Err(format!("{charge} is not in 0..=150"));
    }
    Ok(charge)
}
