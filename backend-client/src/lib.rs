//! HTTP client for the external ROI computation service.
//!
//! The service exposes exactly two endpoints, both `POST` with JSON bodies:
//! `/generate-departments` (industry -> suggested departments) and
//! `/calculate-roi` (full form state -> [`ReportData`]). The cost model
//! behind them is opaque to this crate; we only own the wire contract.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use roiwiz_core::form::FormState;
use roiwiz_core::report::ReportData;

/// Errors from backend calls. Alert text shown to the user comes straight
/// from the `Display` impl, so messages carry the raw detail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (DNS, connection reset, TLS, ...).
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The 2xx body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Client construction failed.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err)
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct DepartmentRequest<'a> {
    industry: &'a str,
}

#[derive(Debug, Deserialize)]
struct DepartmentList {
    departments: Vec<String>,
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// Client for the ROI backend. Cheap to clone via the inner reqwest pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client with an explicit per-request timeout. A hung backend
    /// must surface as an error instead of leaving the UI loading forever.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing reqwest client. Useful for tests.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Suggested departments for an industry, in the order the service
    /// returned them. Callers treat any failure as "no suggestions".
    pub async fn generate_departments(&self, industry: &str) -> ApiResult<Vec<String>> {
        let url = format!("{}/generate-departments", self.base_url);
        tracing::debug!(%industry, "requesting department suggestions");
        let response = self
            .client
            .post(&url)
            .json(&DepartmentRequest { industry })
            .send()
            .await?;
        let list: DepartmentList = Self::decode(response).await?;
        Ok(list.departments)
    }

    /// Run the ROI computation over the full collected form state.
    pub async fn calculate_roi(&self, form: &FormState) -> ApiResult<ReportData> {
        let url = format!("{}/calculate-roi", self.base_url);
        tracing::debug!(
            industry = %form.organization_industry,
            department = %form.department,
            "requesting roi computation"
        );
        let response = self.client.post(&url).json(form).send().await?;
        Self::decode(response).await
    }

    /// Shared 2xx/JSON decoding with raw-message error extraction.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorDetail>(&body) {
                Ok(detail) => detail.detail,
                Err(_) => body,
            };
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
