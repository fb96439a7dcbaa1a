//! Analytics API Client
//!
//! A client for the dashboard backend's `/api/data` endpoint.

use crate::api::error::ApiError;
use crate::api::types::{AnalyticsSnapshot, ErrorBody};
use crate::api::AnalyticsApi;
use crate::consts::cli_consts::{ANALYTICS_ENDPOINT, GENERIC_FAILURE, refresh};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("oi-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    environment: Environment,
}

impl AnalyticsClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(refresh::connect_timeout())
            .timeout(refresh::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Reason reported by a failed response, falling back to a generic message.
    fn failure_reason(body: &Value) -> String {
        Self::error_field(body).unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }

    fn error_field(body: &Value) -> Option<String> {
        serde_json::from_value::<ErrorBody>(body.clone())
            .ok()
            .and_then(|b| b.error)
            .filter(|msg| !msg.is_empty())
    }

    /// Turns a status code and a raw body into a snapshot or a failure.
    ///
    /// The body is parsed before the status is inspected, so a non-JSON error
    /// page surfaces as a decode error.
    fn interpret(status: u16, is_success: bool, bytes: &[u8]) -> Result<AnalyticsSnapshot, ApiError> {
        let body: Value = serde_json::from_slice(bytes)?;

        if !is_success {
            return Err(ApiError::Http {
                status,
                message: Self::failure_reason(&body),
            });
        }
        if let Some(message) = Self::error_field(&body) {
            return Err(ApiError::Application(message));
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait::async_trait]
impl AnalyticsApi for AnalyticsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_analytics(&self, symbol: &str) -> Result<AnalyticsSnapshot, ApiError> {
        let endpoint = format!(
            "{}?symbol={}",
            ANALYTICS_ENDPOINT,
            urlencoding::encode(symbol)
        );
        let url = self.build_url(&endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        Self::interpret(status.as_u16(), status.is_success(), &bytes)
    }
}
