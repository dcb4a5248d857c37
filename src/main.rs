mod cli;
mod config;
mod error;
mod probe;
mod render;
mod scoring;
mod shell;
mod telemetry;
mod types;

use crate::error::ChurnError;
use crate::shell::input::{parse_command, ViewEvent};
use crate::shell::state::ViewState;
use crate::shell::view::{RedrawPolicy, View};
use crate::types::config::ChurnConfig;
use crate::types::scoring::{ContractType, CustomerInput};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ChurnError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;
    tracing::info!("churn-gauge v{}", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Predict(cmd) => run_predict(cmd, &loaded),
        cli::Commands::Demo(cmd) => run_demo(cmd, &loaded),
        cli::Commands::Probe(cmd) => run_probe(cmd, &loaded),
    }
}

fn run_predict(cmd: cli::PredictCommand, loaded: &ChurnConfig) -> Result<i32, ChurnError> {
    let defaults = loaded.default_inputs();
    let contract = cmd
        .contract
        .map(contract_from_cli)
        .unwrap_or(defaults.contract);
    let input = CustomerInput::new(
        cmd.tenure.unwrap_or(defaults.tenure_months),
        cmd.monthly_charge.unwrap_or(defaults.monthly_charge),
        contract,
    );

    let mut state = ViewState::new(input, &loaded.animation_settings(), loaded.currency());
    state.predict();
    state.finish_animation();
    tracing::info!(score = state.prediction().score, "prediction computed");

    let output_format = match cmd.format {
        cli::ReportFormat::Text => render::OutputFormat::Text,
        cli::ReportFormat::Json => render::OutputFormat::Json,
        cli::ReportFormat::Md => render::OutputFormat::Md,
    };
    let rendered = render::render(&render::Frame::capture(&state), output_format)?;
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn run_demo(cmd: cli::DemoCommand, loaded: &ChurnConfig) -> Result<i32, ChurnError> {
    let settings = loaded.animation_settings();
    let policy = if cmd.every_frame {
        RedrawPolicy::EveryFrame
    } else {
        RedrawPolicy::OnChange
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(async {
        let (tx, mut rx) = mpsc::channel::<ViewEvent>(32);
        tokio::spawn(forward_stdin(tx));

        let state = ViewState::new(loaded.default_inputs(), &settings, loaded.currency());
        let mut view = View::mount(state, &settings, std::io::stdout(), policy)?;
        view.run(&mut rx).await?;
        tracing::info!(
            frames = view.frames_drawn(),
            score = view.state().prediction().score,
            "demo finished"
        );
        Ok::<(), ChurnError>(())
    });
    // The stdin reader may still be parked on a blocking read.
    runtime.shutdown_background();

    outcome.map(|()| exit_code::SUCCESS)
}

/// Turns stdin lines into view events. Bad lines are reported and skipped.
async fn forward_stdin(tx: mpsc::Sender<ViewEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Ok(Some(event)) => {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => tracing::warn!("{err}"),
            },
            Ok(None) => break,
            Err(err) => {
                tracing::error!("failed to read stdin: {err}");
                break;
            }
        }
    }
}

fn run_probe(cmd: cli::ProbeCommand, loaded: &ChurnConfig) -> Result<i32, ChurnError> {
    let endpoint = cmd
        .endpoint
        .unwrap_or_else(|| loaded.probe_endpoint().to_string());
    let defaults = probe::ProbeRequest::default();
    let request = probe::ProbeRequest {
        gender: cmd.gender.unwrap_or(defaults.gender),
        partner: cmd.partner.unwrap_or(defaults.partner),
        tenure: cmd.tenure.unwrap_or(defaults.tenure),
        monthly_charges: cmd.monthly_charges.unwrap_or(defaults.monthly_charges),
        contract: cmd.contract.unwrap_or(defaults.contract),
        internet_service: cmd.internet_service.unwrap_or(defaults.internet_service),
        online_security: cmd.online_security.unwrap_or(defaults.online_security),
        tech_support: cmd.tech_support.unwrap_or(defaults.tech_support),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let client = probe::ProbeClient::new(endpoint);
    runtime.block_on(client.run(&request));
    Ok(exit_code::SUCCESS)
}

fn contract_from_cli(contract: cli::Contract) -> ContractType {
    match contract {
        cli::Contract::MonthToMonth => ContractType::MonthToMonth,
        cli::Contract::OneYear => ContractType::OneYear,
        cli::Contract::TwoYears => ContractType::TwoYears,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
