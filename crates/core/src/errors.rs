//! Core error types for the Growfolio application.
//!
//! This module defines transport-agnostic error types. The HTTP client in
//! the `connect` crate maps raw response statuses into these types; the
//! session controller branches on them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the profile-management core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors surfaced by the user-service HTTP client.
///
/// `NotFound` is raised only for a 404 on a profile fetch. It marks the
/// normal "no profile yet" state and is converted by the session controller
/// rather than shown to the user.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-2xx status not otherwise classified.
    #[error("Service responded with HTTP {status}")]
    Transport { status: u16 },

    /// 404 on a profile fetch: the record does not exist.
    #[error("Record not found")]
    NotFound,

    /// The service rejected a create/update, carrying its error payload.
    #[error("Service rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Failed to reach service: {0}")]
    Connection(String),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to parse service response: {0}")]
    Deserialize(String),
}

/// Validation errors raised locally, before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True when this error is the "profile absent" marker.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
