//! HTTP client for the Growfolio user-management service.
//!
//! This module provides the typed request layer behind the account/profile
//! screen. It issues authenticated JSON calls against the `/api/v1` user
//! API and maps response statuses into the core error taxonomy. It never
//! retries and keeps no state beyond the reqwest client itself.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use growfolio_core::accounts::{Account, AccountUpdate};
use growfolio_core::constants::API_BASE_PATH;
use growfolio_core::errors::{ApiError, Error, Result};
use growfolio_core::profiles::{Profile, ProfileUpdate};

use crate::profile::UserApiClient;
use crate::token::TokenProvider;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing user-service responses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// User API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the Growfolio user service.
///
/// # Example
///
/// ```ignore
/// let tokens = Arc::new(StaticTokenProvider::new("jwt"));
/// let client = ConnectApiClient::new("https://api.growfolio.app", tokens)?;
/// let account = client.fetch_account().await?;
/// ```
pub struct ConnectApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ConnectApiClient {
    /// Create a new user-service client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the service (e.g., "https://api.growfolio.app")
    /// * `tokens` - Credential accessor queried once per authenticated request
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE_PATH, path)
    }

    /// Create headers for an API request, attaching the bearer token for
    /// authenticated endpoints when one is available. A missing token is
    /// sent as-is and surfaces as the service's 401/403.
    fn headers(&self, authenticated: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if authenticated {
            if let Some(token) = self.tokens.access_token() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Unexpected(format!("Invalid access token: {}", e)))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }

    /// Make an authenticated GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[UserApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers(true)?)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Self::parse_response(response).await
    }

    /// Parse an HTTP response, mapping any non-2xx status to a transport
    /// error. 404-on-profile classification happens at the call site.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Transport {
                status: status.as_u16(),
            }
            .into());
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("{} - {}", e, body)).into())
    }

    /// Parse the response to a profile create/update, surfacing the
    /// service's error payload on rejection.
    async fn parse_mutation_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::rejection(status, &body).into());
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("{} - {}", e, body)).into())
    }

    /// Build a rejection error from the service's error body, falling back
    /// to a trimmed body snippet when the payload is not structured.
    fn rejection(status: StatusCode, body: &str) -> ApiError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or_else(|| body.chars().take(200).collect());

        ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
    }

    /// Send a JSON body and parse the response with the given parser.
    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
        mutation: bool,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[UserApi] {} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .headers(self.headers(true)?)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if mutation {
            Self::parse_mutation_response(response).await
        } else {
            Self::parse_response(response).await
        }
    }

    /// Issue an unauthenticated availability probe.
    async fn check_available(&self, path: &str) -> Result<bool> {
        let url = self.url(path);
        debug!("[UserApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers(false)?)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let parsed: AvailabilityResponse = Self::parse_response(response).await?;
        Ok(parsed.available)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UserApiClient Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UserApiClient for ConnectApiClient {
    /// Fetch the authenticated user's account.
    async fn fetch_account(&self) -> Result<Account> {
        self.get("/users/account").await
    }

    /// Fetch an account by username.
    async fn fetch_account_by_username(&self, username: &str) -> Result<Account> {
        self.get(&format!(
            "/users/profile?username={}",
            urlencoding::encode(username)
        ))
        .await
    }

    /// Update the account's mutable subset. Unset draft fields leave the
    /// server values untouched.
    async fn update_account(&self, user_id: i64, update: &AccountUpdate) -> Result<Account> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/users/{}", user_id),
            update,
            false,
        )
        .await
    }

    /// Fetch the user's profile. A 404 marks the normal "no profile yet"
    /// state; every other non-2xx stays a transport error.
    async fn fetch_profile(&self, user_id: i64) -> Result<Profile> {
        match self.get(&format!("/users/{}/profile", user_id)).await {
            Err(Error::Api(ApiError::Transport { status: 404 })) => Err(ApiError::NotFound.into()),
            other => other,
        }
    }

    /// Create the user's profile from the draft's populated fields. The
    /// service assigns the id and computes the derived fields.
    async fn create_profile(&self, user_id: i64, draft: &ProfileUpdate) -> Result<Profile> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/users/{}/profile", user_id),
            draft,
            true,
        )
        .await
    }

    /// Update the user's profile with partial-patch semantics.
    async fn update_profile(&self, user_id: i64, draft: &ProfileUpdate) -> Result<Profile> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/users/{}/profile", user_id),
            draft,
            true,
        )
        .await
    }

    /// Record one more completed learning module and return the updated
    /// profile.
    async fn increment_learning_progress(&self, user_id: i64) -> Result<Profile> {
        let url = self.url(&format!("/users/{}/profile/learning/increment", user_id));
        debug!("[UserApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers(true)?)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Self::parse_response(response).await
    }

    /// Check whether an email address is free to register.
    async fn check_email_available(&self, email: &str) -> Result<bool> {
        self.check_available(&format!(
            "/users/check-email?email={}",
            urlencoding::encode(email)
        ))
        .await
    }

    /// Check whether a username is free to register.
    async fn check_username_available(&self, username: &str) -> Result<bool> {
        self.check_available(&format!(
            "/users/check-username?username={}",
            urlencoding::encode(username)
        ))
        .await
    }

    /// Confirm server-side email verification. No response payload.
    async fn verify_email(&self, user_id: i64) -> Result<()> {
        let url = self.url(&format!("/users/{}/verify-email", user_id));
        debug!("[UserApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers(true)?)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(())
    }
}
