//! Growfolio Core - Domain entities, drafts, and validation.
//!
//! This crate contains the account and profile domain models shared by the
//! Growfolio clients. It is transport-agnostic: the `connect` crate layers
//! the user-service HTTP client and session logic on top of these types.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod profiles;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
