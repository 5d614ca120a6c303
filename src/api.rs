use crate::core::config::AnalystConfig;
use crate::core::types::{AnalysisRequest, AnalysisResponse, Ticker};
use crate::error::{AnalystError, Result};
use serde::Deserialize;
use url::Url;

/// Default message when a failed response carries no `error` field.
pub const ANALYZE_FAILED: &str = "Failed to analyze company";

/// Error payload of a non-2xx response. The `error` field is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Thin client for the analysis endpoint. One POST per submit, no retries.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalysisClient {
    pub fn new(config: &AnalystConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let endpoint = config.api_base_url.join("/api/analyze")?;
        Ok(Self { http, endpoint })
    }

    pub async fn analyze(&self, ticker: &Ticker) -> Result<AnalysisResponse> {
        log::debug!("Starting analysis for {}", ticker);
        let request = AnalysisRequest {
            ticker: ticker.as_str().to_string(),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        log::debug!("Response status: {}", status);

        if !status.is_success() {
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
                .and_then(|body| body.error)
                .unwrap_or_else(|| ANALYZE_FAILED.to_string());
            log::error!("Analysis for {} failed ({}): {}", ticker, status, message);
            return Err(AnalystError::Request { message });
        }

        let body = response.bytes().await?;
        let data: AnalysisResponse = serde_json::from_slice(&body)?;
        log::debug!(
            "Received analysis for {} covering {} years",
            data.company_name,
            data.metrics_by_year.len()
        );
        Ok(data)
    }
}
