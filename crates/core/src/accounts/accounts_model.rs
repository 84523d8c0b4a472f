//! Account domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

/// How much market risk the user is willing to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

/// Domain model representing the authenticated user's account.
///
/// Exactly one account exists per user. It is created by the registration
/// flow and is always present once the user is authenticated; this crate
/// never creates or deletes accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub account_status: AccountStatus,
    pub risk_tolerance: RiskTolerance,
    pub current_balance: Decimal,
    pub total_invested: Decimal,
    pub total_returns: Decimal,
    /// Server-computed aggregate across all linked holdings.
    pub net_worth: Decimal,
    /// ISO 4217 currency code for the monetary fields.
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial-patch input model for the account's mutable subset.
///
/// `None` fields are omitted from the serialized payload and leave the
/// server values untouched. The service enforces its own field rules; there
/// is no client-side precondition for account updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
}

impl AccountUpdate {
    /// Seeds an edit draft from the account's editable fields.
    ///
    /// Credentials and security answers are write-only: they start empty
    /// and are sent only when the user fills them in.
    pub fn seeded_from(account: &Account) -> Self {
        Self {
            email: Some(account.email.clone()),
            risk_tolerance: Some(account.risk_tolerance),
            ..Self::default()
        }
    }

    /// True when no field would be sent to the service.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.security_question.is_none()
            && self.security_answer.is_none()
            && self.risk_tolerance.is_none()
    }
}
