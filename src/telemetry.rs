use crate::error::ChurnError;
use tracing_subscriber::EnvFilter;

/// Default filter for a verbosity level: `-q` errors only, otherwise warn,
/// info and debug for zero, one and two or more `-v`.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the flags.
pub fn init(verbose: u8, quiet: bool) -> Result<(), ChurnError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_for(verbose, quiet))
            .map_err(|e| ChurnError::Telemetry(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| ChurnError::Telemetry(e.to_string()))
}
