//! Customer IDs API Client for testing

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the deployed API base URL
pub const API_URL_ENV: &str = "CUSTOMER_IDS_API_URL";

/// API client for the customer ids endpoints
pub struct CustomerIdsClient {
    client: Client,
    base_url: String,
}

// Request/Response types

#[derive(Debug, Clone, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcceptedResponse {
    pub status: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Result type for API responses
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// HTTP error with status code and body
    Http { status: StatusCode, body: String },
    /// Network or serialization error
    Request(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Status code of an HTTP error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(status.as_u16()),
            ApiError::Request(_) => None,
        }
    }

    /// The `error` field of an HTTP error body
    pub fn error_message(&self) -> Option<String> {
        match self {
            ApiError::Http { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .map(|e| e.error),
            ApiError::Request(_) => None,
        }
    }
}

impl CustomerIdsClient {
    /// Create a new client with the given base URL
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the environment (a `.env` file is honoured)
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();
        std::env::var(API_URL_ENV).ok().map(|url| Self::new(&url))
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// Check whether an id is stored
    pub async fn get_exists(&self, id: &str) -> ApiResult<ExistsResponse> {
        self.send(self.client.get(self.url(&format!("/customers/{}", id))))
            .await
    }

    /// Check with the id sent as a header instead of a path segment
    pub async fn get_exists_by_header(&self, id: &str) -> ApiResult<ExistsResponse> {
        self.send(self.client.get(self.url("/customers")).header("id", id))
            .await
    }

    /// Store an id
    pub async fn put_id(&self, id: &str) -> ApiResult<MessageResponse> {
        self.send(self.client.put(self.url(&format!("/customers/{}", id))))
            .await
    }

    /// Delete an id
    pub async fn delete_id(&self, id: &str) -> ApiResult<MessageResponse> {
        self.send(self.client.delete(self.url(&format!("/customers/{}", id))))
            .await
    }

    /// Submit an id for asynchronous processing
    pub async fn submit(&self, id: &str) -> ApiResult<AcceptedResponse> {
        let req = SubmitRequest { id: id.to_string() };
        self.send(self.client.post(self.url("/customers")).json(&req))
            .await
    }

    // =========================================================================
    // HTTP Helpers
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ApiError::Request(e.to_string()))
        } else {
            Err(ApiError::Http { status, body })
        }
    }
}
