//! Profile domain models.
//!
//! A profile is the optional investment-preferences record tied 1:1 to an
//! account. It is created on the user's first explicit save and updated in
//! place afterwards; there is no delete operation. The derived fields
//! (`progress_percentage`, `days_until_goal`, `is_goal_overdue`) are
//! computed by the service and only formatted here, never re-derived.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Self-reported investing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// What the user is investing towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentGoal {
    Retirement,
    WealthBuilding,
    Education,
    HomePurchase,
    EmergencyFund,
    Other,
}

/// Personal financial goal, independent of the investment goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialGoal {
    PayOffDebt,
    BuyACar,
    StartABusiness,
    FinancialIndependence,
    Travel,
    Other,
}

/// Instrument classes the user wants to invest in. Closed set of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredInvestmentType {
    Stocks,
    MutualFunds,
    Etfs,
    Crypto,
}

/// Domain model representing a user's investment profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub experience_level: ExperienceLevel,
    pub investment_goal: InvestmentGoal,
    pub financial_goal: Option<FinancialGoal>,
    #[serde(default)]
    pub preferred_investment_types: BTreeSet<PreferredInvestmentType>,
    /// Target amount for the investment goal.
    pub target_amount: Option<Decimal>,
    /// Target date for the investment goal.
    pub target_date: Option<NaiveDate>,
    /// Target amount for the personal financial goal.
    pub financial_goal_amount: Option<Decimal>,
    /// Free-text description of the personal financial goal.
    pub financial_goal_description: Option<String>,
    /// Progress towards the investment goal, 0-100. Server-computed.
    #[serde(default)]
    pub progress_percentage: f64,
    /// Signed days until the goal target date. Server-computed.
    #[serde(default)]
    pub days_until_goal: i64,
    /// Whether the goal target date has passed. Server-computed.
    #[serde(default)]
    pub is_goal_overdue: bool,
    /// Count of completed learning modules.
    #[serde(default)]
    pub learning_progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Goal progress scaled to 0.0-1.0 for a bounded progress bar.
    ///
    /// The server value is trusted but clamped so a rendering glitch can
    /// never overflow the bar.
    pub fn progress_ratio(&self) -> f64 {
        self.progress_percentage.clamp(0.0, 100.0) / 100.0
    }

    /// Label for the goal countdown: "Overdue" once the target date has
    /// passed, otherwise the signed day count.
    pub fn goal_countdown_label(&self) -> String {
        if self.is_goal_overdue {
            "Overdue".to_string()
        } else if self.days_until_goal == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days_until_goal)
        }
    }
}

/// Partial-patch input model for creating or updating a profile.
///
/// Every field is optional; `None` fields are omitted from the serialized
/// payload, so an update leaves the corresponding server values untouched.
/// The service assigns the profile id and computes the derived fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_goal: Option<InvestmentGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_goal: Option<FinancialGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_investment_types: Option<BTreeSet<PreferredInvestmentType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_goal_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_goal_description: Option<String>,
}

impl ProfileUpdate {
    /// Seeds an edit draft from an existing profile's input fields.
    ///
    /// Derived fields and ids never belong to a draft.
    pub fn seeded_from(profile: &Profile) -> Self {
        Self {
            experience_level: Some(profile.experience_level),
            investment_goal: Some(profile.investment_goal),
            financial_goal: profile.financial_goal,
            preferred_investment_types: Some(profile.preferred_investment_types.clone()),
            target_amount: profile.target_amount,
            target_date: profile.target_date,
            financial_goal_amount: profile.financial_goal_amount,
            financial_goal_description: profile.financial_goal_description.clone(),
        }
    }

    /// Validates the required fields before any network call.
    ///
    /// A profile cannot be saved without an experience level and an
    /// investment goal; everything else is optional.
    pub fn validate_for_save(&self) -> Result<()> {
        if self.experience_level.is_none() {
            return Err(ValidationError::MissingField("experience_level").into());
        }
        if self.investment_goal.is_none() {
            return Err(ValidationError::MissingField("investment_goal").into());
        }
        Ok(())
    }

    /// Adds the given type to the draft's preference set, or removes it if
    /// already present. Toggling twice restores the original set.
    pub fn toggle_preferred_type(&mut self, kind: PreferredInvestmentType) {
        let set = self
            .preferred_investment_types
            .get_or_insert_with(BTreeSet::new);
        if !set.insert(kind) {
            set.remove(&kind);
        }
    }
}
