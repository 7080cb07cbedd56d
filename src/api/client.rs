//! API client for the Human API matching service.
//!
//! This module provides the `ApiClient` struct for issuing typed auth and
//! matching requests against a configured base URL. The client performs no
//! business validation beyond the request layer's own preconditions; it is a
//! transport and classification layer only.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::models::{Availability, Identity, MatchCandidate};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 10s fails fast enough for interactive use while tolerating a slow match
/// computation.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Registration payload for `POST /auth/register`.
///
/// Precondition checks (non-empty email and name, password length, password
/// confirmation) belong to the caller; the client sends what it is given.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Partial profile update for `PUT /auth/profile/{id}`.
///
/// Only fields that are set are serialized; omitted fields keep their prior
/// server-side value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

/// Envelope the auth endpoints wrap an Identity in.
#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    success: bool,
    #[serde(default)]
    message: String,
    data: Identity,
}

/// API client for the Human API service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default request deadline.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Create a new API client with an explicit request deadline.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Register a new account, returning the created Identity.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Identity, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        debug!(email = %request.email, "Registering account");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::parse_auth(response).await
    }

    /// Log in with email and password, returning the account's Identity.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(email = %email, "Logging in");

        let body = json!({ "email": email, "password": password });
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::parse_auth(response).await
    }

    /// Update profile fields for an account. The returned Identity is the
    /// authoritative full post-update record and must replace any cached one.
    pub async fn update_profile(
        &self,
        identity_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Identity, ApiError> {
        let url = format!("{}/auth/profile/{}", self.base_url, identity_id);
        debug!(identity_id = %identity_id, "Updating profile");

        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::parse_auth(response).await
    }

    /// Submit an intent description and return candidates, most relevant
    /// first. Whitespace-only input is rejected locally without a network
    /// call.
    pub async fn find_matches(&self, intent: &str) -> Result<Vec<MatchCandidate>, ApiError> {
        let intent = intent.trim();
        if intent.is_empty() {
            return Err(ApiError::Validation(
                "Describe what you are looking for".to_string(),
            ));
        }

        let url = format!("{}/intent", self.base_url);
        debug!("Submitting intent");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "intent": intent }))
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_response(response).await?;
        let text = response.text().await.map_err(ApiError::from_transport)?;

        // Exactly one shape is accepted: a JSON array of candidates. A
        // non-array that happens to parse is a contract violation, not data.
        serde_json::from_str::<Vec<MatchCandidate>>(&text).map_err(|e| {
            warn!(error = %e, "Match response did not match expected shape");
            ApiError::MalformedResponse(e.to_string())
        })
    }

    /// Check if response is successful, classifying the body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Parse the `{success, message, data}` envelope the auth endpoints use.
    async fn parse_auth(response: reqwest::Response) -> Result<Identity, ApiError> {
        let response = Self::check_response(response).await?;
        let text = response.text().await.map_err(ApiError::from_transport)?;

        let envelope: AuthEnvelope = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "Auth response did not match expected shape");
            ApiError::MalformedResponse(e.to_string())
        })?;

        // A 2xx that claims failure does not match the documented success
        // shape either.
        if !envelope.success {
            warn!(message = %envelope.message, "Auth envelope flagged success=false on a 2xx");
            return Err(ApiError::MalformedResponse(format!(
                "success=false: {}",
                envelope.message
            )));
        }

        Ok(envelope.data)
    }
}
