//! Ripple API client
//!
//! Shared HTTP plumbing for the REST repositories: URL building, auth
//! headers, and decoding of the API's response envelopes.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::RestError;

/// Low-level client for the Ripple REST API
pub struct RestClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, RestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.api_url(path));
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// GET a list endpoint and decode its paginated envelope
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<PaginatedResponse<T>, RestError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let envelope: PaginatedResponse<T> = self.decode(response).await?;

        if !envelope.success {
            return Err(RestError::Envelope(envelope.message));
        }
        Ok(envelope)
    }

    /// POST a JSON body to a command endpoint
    pub(crate) async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), RestError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.decode_command(response).await
    }

    /// PUT to a command endpoint with no body
    pub(crate) async fn put(&self, path: &str) -> Result<(), RestError> {
        let response = self.request(Method::PUT, path).send().await?;
        self.decode_command(response).await
    }

    /// DELETE a resource
    pub(crate) async fn delete(&self, path: &str) -> Result<(), RestError> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.decode_command(response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| RestError::Deserialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(self.error_from(status.as_u16(), body))
        }
    }

    /// Command endpoints wrap their acknowledgement in the non-paginated
    /// envelope; only the success flag matters to callers.
    async fn decode_command(&self, response: reqwest::Response) -> Result<(), RestError> {
        let envelope: ApiResponse<serde_json::Value> = self.decode(response).await?;

        if !envelope.success {
            return Err(RestError::Envelope(envelope.message));
        }
        Ok(())
    }

    fn error_from(&self, status: u16, body: String) -> RestError {
        if status == 401 {
            return RestError::Unauthorized;
        }
        if status == 429 {
            return RestError::RateLimited;
        }

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => RestError::Api {
                status,
                code: err.code,
                message: err.message,
            },
            Err(_) => RestError::Api {
                status,
                code: "unknown".to_string(),
                message: body,
            },
        }
    }
}

/// Paginated response envelope from the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationDto,
    pub message: String,
    pub success: bool,
    #[allow(dead_code)]
    pub timestamp: DateTime<Utc>,
}

/// Wire shape of the pagination metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Non-paginated envelope for single-item and command results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiResponse<T> {
    #[allow(dead_code)]
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
    #[allow(dead_code)]
    pub timestamp: DateTime<Utc>,
}

/// Error body the API returns on non-2xx statuses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    message: String,
    code: String,
    #[allow(dead_code)]
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[allow(dead_code)]
    timestamp: DateTime<Utc>,
}
