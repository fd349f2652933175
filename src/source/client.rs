use crate::config::ApiConfig;
use crate::errors::{ApiError, ApiResult};
use crate::source::{calculate_next_backoff, CubeQuery, CubeResponse};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Cube reports this while a query is still being computed
const CONTINUE_WAIT: &str = "Continue wait";

/// Error bodies are truncated to this many characters
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Cube analytics API client with timeout and retry logic
pub struct CubeClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CubeClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// Run a query, retrying transient failures with exponential backoff
    pub async fn load(&self, query: &CubeQuery) -> ApiResult<CubeResponse> {
        let operation = describe(query);
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);
        let mut attempt = 0usize;

        loop {
            match self.load_once(query, &operation).await {
                Ok(response) => {
                    info!("{}: {} rows", operation, response.data.len());
                    return Ok(response);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        "{} failed (attempt {}/{}): {}; retrying in {:?}",
                        operation,
                        attempt,
                        self.config.max_retries + 1,
                        e,
                        backoff
                    );
                    sleep(backoff).await;
                    backoff = calculate_next_backoff(
                        backoff,
                        self.config.backoff_multiplier,
                        self.config.max_backoff_seconds,
                    );
                }
                Err(e) if e.is_retryable() => {
                    warn!("{} failed after {} attempts: {}", operation, attempt + 1, e);
                    return Err(ApiError::MaxRetriesExceeded { operation });
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn load_once(&self, query: &CubeQuery, operation: &str) -> ApiResult<CubeResponse> {
        debug!("POST {} ({})", self.config.url, operation);

        let response = self
            .http
            .post(&self.config.url)
            .header("x-api-key", &self.config.api_key)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e, operation))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e, operation))?;

        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_body(&body)
    }

    fn map_transport_error(&self, err: reqwest::Error, operation: &str) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_seconds: self.config.timeout_seconds,
                operation: operation.to_string(),
            }
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Decode a successful response body
///
/// A `{"error": "Continue wait"}` body means the query is still running and is
/// reported as a retryable failure.
pub fn parse_body(body: &str) -> ApiResult<CubeResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Body is not JSON: {}", e)))?;

    if let Some(error) = value.get("error").and_then(Value::as_str) {
        if error == CONTINUE_WAIT {
            return Err(ApiError::RequestFailed("query still processing".to_string()));
        }
        return Err(ApiError::InvalidResponse(error.to_string()));
    }

    if value.get("data").is_none() {
        return Err(ApiError::InvalidResponse("missing data field".to_string()));
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

fn describe(query: &CubeQuery) -> String {
    let granularity = query
        .time_dimensions
        .first()
        .and_then(|t| t.granularity.as_deref())
        .unwrap_or("total");
    format!("cube load [{}]", granularity)
}
