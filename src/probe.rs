//! One-shot call to a remote prediction backend.
//!
//! The scoring core never depends on this module. Failures are logged and
//! swallowed; there is no retry and no timeout.

use crate::error::ChurnError;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Customer attributes in the backend's field naming.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRequest {
    pub gender: String,
    #[serde(rename = "Partner")]
    pub partner: String,
    pub tenure: u32,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
}

impl Default for ProbeRequest {
    fn default() -> Self {
        Self {
            gender: "Male".to_string(),
            partner: "No".to_string(),
            tenure: 12,
            monthly_charges: 70.0,
            contract: "Month-to-Month".to_string(),
            internet_service: "DSL".to_string(),
            online_security: "No".to_string(),
            tech_support: "No".to_string(),
        }
    }
}

pub struct ProbeClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl ProbeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Posts the request and parses whatever JSON comes back.
    pub async fn send(&self, request: &ProbeRequest) -> Result<Value, ChurnError> {
        info!(endpoint = %self.endpoint, "calling backend");
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }

    /// Fire-and-forget: prints the parsed response, or logs the failure.
    pub async fn run(&self, request: &ProbeRequest) -> Option<Value> {
        match self.send(request).await {
            Ok(body) => {
                println!("Backend response: {body}");
                Some(body)
            }
            Err(err) => {
                error!(endpoint = %self.endpoint, "error calling backend: {err}");
                None
            }
        }
    }
}
