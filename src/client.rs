use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatCompletionParams, ChatCompletionResponse};

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Referer identifying this application to OpenRouter; required by the API.
const HTTP_REFERER: &str = "http://localhost:8501";
const APP_TITLE: &str = "sidekick";

/// A source of chat completions.
///
/// This is the seam between the orchestrators and the HTTP client: the
/// session only ever sees one async request/response call with an explicit
/// Result outcome, so tests can substitute a scripted backend.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issue exactly one completion request.
    async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletionResponse>;
}

/// Client for the OpenRouter chat-completions API.
#[derive(Clone)]
pub struct OpenRouter {
    api_key: String,
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl std::fmt::Debug for OpenRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouter")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl OpenRouter {
    /// Create a new OpenRouter client.
    ///
    /// The API key can be provided directly or read from the
    /// OPENROUTER_API_KEY environment variable. A missing key is fatal and
    /// no HTTP client is constructed.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_options(api_key, None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => env::var("OPENROUTER_API_KEY").map_err(|_| {
                Error::authentication(
                    "API key not provided and OPENROUTER_API_KEY environment variable not set",
                )
            })?,
        };

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout,
            logger: None,
        })
    }

    /// Installs a logger that observes every request and response.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .expect("API key should be valid"),
        );
        headers.insert("http-referer", HeaderValue::from_static(HTTP_REFERER));
        headers.insert("x-title", HeaderValue::from_static(APP_TITLE));
        headers
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // Error body shape shared by OpenAI-compatible endpoints.
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            #[serde(rename = "type")]
            error_type: Option<String>,
            message: Option<String>,
            param: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let parsed_error = serde_json::from_str::<ErrorResponse>(&error_body).ok();
        let error_type = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.error_type.clone());
        let error_message = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| error_body.clone());
        let error_param = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.param.clone());

        match status_code {
            400 => Error::bad_request(error_message, error_param),
            401 => Error::authentication(error_message),
            403 => Error::permission(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_type, error_message),
        }
    }

    /// Send a completion request to the API and parse the response.
    pub async fn send(&self, params: ChatCompletionParams) -> Result<ChatCompletionResponse> {
        let url = format!("{}chat/completions", self.base_url);

        observability::CLIENT_REQUESTS.click();
        if let Some(logger) = &self.logger {
            logger.log_request(&params);
        }
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                }
            })?;

        if !response.status().is_success() {
            observability::CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                observability::CLIENT_REQUEST_ERRORS.click();
                Error::serialization(
                    format!("Failed to parse response: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        observability::CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        if let Some(logger) = &self.logger {
            logger.log_response(&parsed);
        }
        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl CompletionBackend for OpenRouter {
    async fn complete(&self, params: ChatCompletionParams) -> Result<ChatCompletionResponse> {
        self.send(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        // Explicit API key, default settings
        let client = OpenRouter::new(Some("test-key".to_string())).unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, DEFAULT_API_URL);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        // Custom options
        let client = OpenRouter::with_options(
            Some("test-key".to_string()),
            Some("https://custom-api.example.com/".to_string()),
            Some(Duration::from_secs(30)),
        )
        .unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom-api.example.com/");
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_headers_carry_bearer_token() {
        let client = OpenRouter::new(Some("test-key".to_string())).unwrap();
        let headers = client.default_headers();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer test-key"
        );
        assert_eq!(headers.get("http-referer").unwrap(), HTTP_REFERER);
        assert_eq!(headers.get("x-title").unwrap(), APP_TITLE);
    }
}
