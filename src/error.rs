use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChurnError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ChurnError>;
