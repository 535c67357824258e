use reqwest::Client;
use thiserror::Error;

use crate::api::types::{KMeansRequest, KMeansResponse};
use crate::canvas::Point;

/// Where the Flask backend listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// HTTP client for the external dataset and computation endpoints.
///
/// Performs no retries; every failure is reported to the caller and the
/// action must be re-triggered by the user.
pub struct KMeansClient {
    http: Client,
    endpoint: String,
}

impl KMeansClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch a freshly generated dataset from `GET /data`.
    pub async fn fetch_data(&self) -> Result<Vec<Point>, ApiError> {
        let response = self
            .http
            .get(format!("{}/data", self.endpoint))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Run the clustering computation via `POST /kmeans` and return the raw
    /// per-iteration response. Shape validation against the run's dataset
    /// and k happens at the session layer.
    pub async fn run_kmeans(&self, request: &KMeansRequest) -> Result<KMeansResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/kmeans", self.endpoint))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
