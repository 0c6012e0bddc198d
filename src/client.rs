// SPDX-License-Identifier: MIT

//! HTTP client for the remote shift service.
//!
//! Endpoints:
//! - `GET /shifts` — full shift list as JSON
//! - `GET /shifts/{id}/book` — book one shift
//! - `GET /shifts/{id}/cancel` — cancel one shift
//!
//! Failed calls carry a JSON body with a `message` field; that text is
//! what the status classification runs against.

use crate::config::Config;
use crate::error::AppError;
use crate::models::Shift;
use serde::Deserialize;

/// Shift service API client.
#[derive(Clone)]
pub struct ShiftsClient {
    http: reqwest::Client,
    base_url: String,
}

/// Failure body shape: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

impl ShiftsClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Fetch the full shift list.
    pub async fn list_shifts(&self) -> Result<Vec<Shift>, AppError> {
        let url = format!("{}/shifts", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let response = self.check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Book one shift by id.
    pub async fn book_shift(&self, id: &str) -> Result<(), AppError> {
        self.action(id, "book").await
    }

    /// Cancel one shift by id.
    pub async fn cancel_shift(&self, id: &str) -> Result<(), AppError> {
        self.action(id, "cancel").await
    }

    async fn action(&self, id: &str, verb: &str) -> Result<(), AppError> {
        let url = format!("{}/shifts/{}/{}", self.base_url, id, verb);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response(response).await?;
        Ok(())
    }

    /// Check response status; on failure, extract the server's message.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiMessage>(&body) {
            Ok(api) => {
                tracing::warn!(status = %status, message = %api.message, "Shift API error");
                Err(AppError::Api(api.message))
            }
            Err(_) => {
                tracing::warn!(status = %status, body = %body, "Shift API error without message");
                Err(AppError::Api(format!("HTTP {}: {}", status, body)))
            }
        }
    }
}
