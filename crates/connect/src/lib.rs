//! Growfolio Connect - user-service integration for Growfolio.
//!
//! This crate provides the HTTP client for the Growfolio user-management
//! service and the session controller behind the account/profile screen.

pub mod client;
pub mod profile;
pub mod token;

// Re-export commonly used types
pub use client::ConnectApiClient;
pub use profile::{
    LoadedProfile, Notice, ProfileSession, SessionPhase, SessionState, TabState, UserApiClient,
};
pub use token::{StaticTokenProvider, TokenProvider};
