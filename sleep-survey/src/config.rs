//! Prediction endpoint configuration, read from the environment.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENDPOINT_VAR: &str = "SLEEP_SURVEY_ENDPOINT";
pub const HEALTH_ENDPOINT_VAR: &str = "SLEEP_SURVEY_HEALTH_ENDPOINT";
pub const TIMEOUT_VAR: &str = "SLEEP_SURVEY_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL the survey payload is POSTed to.
    pub endpoint: String,

    /// Optional URL probed with GET before each submission.
    pub health_endpoint: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables and defaults.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            endpoint: lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),

            health_endpoint: lookup(HEALTH_ENDPOINT_VAR).filter(|url| !url.is_empty()),

            timeout_secs: lookup(TIMEOUT_VAR)
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds"))?
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Replace the prediction endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Enable the pre-flight health probe.
    pub fn with_health_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.health_endpoint = Some(endpoint.into());
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        parse_http_url(&self.endpoint).context("invalid prediction endpoint")?;

        if let Some(health) = &self.health_endpoint {
            parse_http_url(health).context("invalid health endpoint")?;
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("Timeout must be greater than 0");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            health_endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("'{raw}' is not a valid URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("unsupported URL scheme '{other}' in '{raw}'"),
    }
}
