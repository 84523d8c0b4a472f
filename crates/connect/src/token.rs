//! Credential access for the user-service client.

use std::fmt;

/// Capability yielding the current bearer token, if any.
///
/// The client resolves the token per request, so rotation never requires a
/// client rebuild. Absence of a token is not validated here: the request
/// goes out unauthenticated and the service's 401/403 surfaces as a
/// transport error.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Token provider backed by a fixed token, for tools and tests.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that never yields a token, for the unauthenticated probes.
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself.
        f.debug_struct("StaticTokenProvider")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
