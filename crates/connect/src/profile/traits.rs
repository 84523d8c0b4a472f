//! Trait defining the contract for user-service operations.

use async_trait::async_trait;

use growfolio_core::accounts::{Account, AccountUpdate};
use growfolio_core::errors::Result;
use growfolio_core::profiles::{Profile, ProfileUpdate};

/// Trait for the typed user-service API consumed by the session controller.
///
/// The concrete implementation is [`crate::client::ConnectApiClient`];
/// tests substitute recording fakes.
#[async_trait]
pub trait UserApiClient: Send + Sync {
    /// Fetch the authenticated user's account.
    async fn fetch_account(&self) -> Result<Account>;

    /// Fetch an account by username.
    async fn fetch_account_by_username(&self, username: &str) -> Result<Account>;

    /// Update the account's mutable subset and return the updated account.
    async fn update_account(&self, user_id: i64, update: &AccountUpdate) -> Result<Account>;

    /// Fetch the user's profile; `ApiError::NotFound` when none exists.
    async fn fetch_profile(&self, user_id: i64) -> Result<Profile>;

    /// Create the user's profile from the draft's populated fields.
    async fn create_profile(&self, user_id: i64, draft: &ProfileUpdate) -> Result<Profile>;

    /// Update the user's profile with partial-patch semantics.
    async fn update_profile(&self, user_id: i64, draft: &ProfileUpdate) -> Result<Profile>;

    /// Record one more completed learning module.
    async fn increment_learning_progress(&self, user_id: i64) -> Result<Profile>;

    /// Check whether an email address is free to register. Unauthenticated.
    async fn check_email_available(&self, email: &str) -> Result<bool>;

    /// Check whether a username is free to register. Unauthenticated.
    async fn check_username_available(&self, username: &str) -> Result<bool>;

    /// Confirm server-side email verification.
    async fn verify_email(&self, user_id: i64) -> Result<()>;
}
