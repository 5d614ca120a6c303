use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct AnalystConfig {
    pub api_base_url: Url,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl AnalystConfig {
    pub fn from_env() -> Result<Self> {
        let raw_url =
            std::env::var("ANALYST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_base_url =
            Url::parse(&raw_url).with_context(|| format!("Invalid ANALYST_API_URL: {}", raw_url))?;

        let user_agent = std::env::var("USER_AGENT")
            .unwrap_or_else(|_| format!("tenk-analyst/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self::with_base_url(api_base_url, user_agent))
    }

    pub fn with_base_url(api_base_url: Url, user_agent: String) -> Self {
        Self {
            api_base_url,
            user_agent,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}
