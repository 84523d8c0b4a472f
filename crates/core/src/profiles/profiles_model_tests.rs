//! Tests for profile domain models, the edit draft, and derived-field
//! presentation helpers.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::errors::{Error, ValidationError};
    use crate::profiles::{
        ExperienceLevel, FinancialGoal, InvestmentGoal, PreferredInvestmentType, Profile,
        ProfileUpdate,
    };
    use chrono::{DateTime, NaiveDate, Utc};
    use rust_decimal_macros::dec;

    // ==================== Enum Serialization Tests ====================

    #[test]
    fn test_preference_enums_serialize_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PreferredInvestmentType::MutualFunds).unwrap(),
            "\"MUTUAL_FUNDS\""
        );
        assert_eq!(
            serde_json::to_string(&PreferredInvestmentType::Etfs).unwrap(),
            "\"ETFS\""
        );
        assert_eq!(
            serde_json::to_string(&InvestmentGoal::WealthBuilding).unwrap(),
            "\"WEALTH_BUILDING\""
        );
        assert_eq!(
            serde_json::to_string(&FinancialGoal::PayOffDebt).unwrap(),
            "\"PAY_OFF_DEBT\""
        );
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Beginner).unwrap(),
            "\"BEGINNER\""
        );
    }

    #[test]
    fn test_profile_deserializes_with_sparse_fields() {
        // A freshly created profile carries only the required preferences;
        // targets are unset and derived fields default.
        let body = r#"{
            "id": 7,
            "user_id": 1,
            "experience_level": "BEGINNER",
            "investment_goal": "RETIREMENT",
            "financial_goal": null,
            "target_amount": null,
            "target_date": null,
            "financial_goal_amount": null,
            "financial_goal_description": null,
            "created_at": "2025-01-15T10:30:00Z",
            "updated_at": "2025-01-15T10:30:00Z"
        }"#;

        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert_eq!(profile.investment_goal, InvestmentGoal::Retirement);
        assert!(profile.financial_goal.is_none());
        assert!(profile.preferred_investment_types.is_empty());
        assert_eq!(profile.progress_percentage, 0.0);
        assert_eq!(profile.days_until_goal, 0);
        assert!(!profile.is_goal_overdue);
        assert_eq!(profile.learning_progress, 0);
    }

    // ==================== Draft Seeding Tests ====================

    #[test]
    fn test_seeded_draft_copies_all_input_fields() {
        let profile = create_test_profile();
        let draft = ProfileUpdate::seeded_from(&profile);

        assert_eq!(draft.experience_level, Some(ExperienceLevel::Intermediate));
        assert_eq!(draft.investment_goal, Some(InvestmentGoal::HomePurchase));
        assert_eq!(draft.financial_goal, Some(FinancialGoal::Travel));
        assert_eq!(
            draft.preferred_investment_types,
            Some(BTreeSet::from([
                PreferredInvestmentType::Stocks,
                PreferredInvestmentType::Etfs,
            ]))
        );
        assert_eq!(draft.target_amount, Some(dec!(50000)));
        assert_eq!(
            draft.target_date,
            Some(NaiveDate::from_ymd_opt(2027, 3, 15).unwrap())
        );
        assert_eq!(draft.financial_goal_amount, Some(dec!(8000)));
        assert_eq!(
            draft.financial_goal_description.as_deref(),
            Some("Road trip fund")
        );
    }

    #[test]
    fn test_draft_never_carries_derived_fields() {
        let profile = create_test_profile();
        let draft = ProfileUpdate::seeded_from(&profile);

        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("progress_percentage"));
        assert!(!object.contains_key("days_until_goal"));
        assert!(!object.contains_key("is_goal_overdue"));
        assert!(!object.contains_key("id"));
    }

    #[test]
    fn test_empty_draft_serializes_to_empty_object() {
        let draft = ProfileUpdate::default();
        assert_eq!(serde_json::to_string(&draft).unwrap(), "{}");
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_rejects_missing_experience_level() {
        let draft = ProfileUpdate {
            investment_goal: Some(InvestmentGoal::Retirement),
            ..ProfileUpdate::default()
        };

        let err = draft.validate_for_save().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField("experience_level"))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_investment_goal() {
        let draft = ProfileUpdate {
            experience_level: Some(ExperienceLevel::Beginner),
            ..ProfileUpdate::default()
        };

        let err = draft.validate_for_save().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField("investment_goal"))
        ));
    }

    #[test]
    fn test_validate_accepts_minimal_draft() {
        let draft = ProfileUpdate {
            experience_level: Some(ExperienceLevel::Beginner),
            investment_goal: Some(InvestmentGoal::Retirement),
            ..ProfileUpdate::default()
        };

        assert!(draft.validate_for_save().is_ok());
    }

    // ==================== Preference Toggle Tests ====================

    #[test]
    fn test_toggle_adds_to_unset_preference_set() {
        let mut draft = ProfileUpdate::default();
        draft.toggle_preferred_type(PreferredInvestmentType::Crypto);

        assert_eq!(
            draft.preferred_investment_types,
            Some(BTreeSet::from([PreferredInvestmentType::Crypto]))
        );
    }

    #[test]
    fn test_toggle_twice_restores_original_set() {
        let profile = create_test_profile();
        let mut draft = ProfileUpdate::seeded_from(&profile);
        let before = draft.preferred_investment_types.clone();

        draft.toggle_preferred_type(PreferredInvestmentType::Crypto);
        assert_ne!(draft.preferred_investment_types, before);

        draft.toggle_preferred_type(PreferredInvestmentType::Crypto);
        assert_eq!(draft.preferred_investment_types, before);
    }

    #[test]
    fn test_toggle_removes_existing_value_without_touching_others() {
        let profile = create_test_profile();
        let mut draft = ProfileUpdate::seeded_from(&profile);

        draft.toggle_preferred_type(PreferredInvestmentType::Stocks);
        assert_eq!(
            draft.preferred_investment_types,
            Some(BTreeSet::from([PreferredInvestmentType::Etfs]))
        );
    }

    // ==================== Derived-Field Presentation Tests ====================

    #[test]
    fn test_progress_ratio_is_bounded() {
        let mut profile = create_test_profile();

        profile.progress_percentage = 42.0;
        assert!((profile.progress_ratio() - 0.42).abs() < f64::EPSILON);

        profile.progress_percentage = 250.0;
        assert_eq!(profile.progress_ratio(), 1.0);

        profile.progress_percentage = -10.0;
        assert_eq!(profile.progress_ratio(), 0.0);
    }

    #[test]
    fn test_goal_countdown_label_renders_overdue() {
        let mut profile = create_test_profile();
        profile.is_goal_overdue = true;
        profile.days_until_goal = -12;

        assert_eq!(profile.goal_countdown_label(), "Overdue");
    }

    #[test]
    fn test_goal_countdown_label_renders_signed_day_count() {
        let mut profile = create_test_profile();

        profile.days_until_goal = 12;
        assert_eq!(profile.goal_countdown_label(), "12 days");

        profile.days_until_goal = 1;
        assert_eq!(profile.goal_countdown_label(), "1 day");

        profile.days_until_goal = -3;
        assert_eq!(profile.goal_countdown_label(), "-3 days");
    }

    // ==================== Helper Functions ====================

    fn create_test_profile() -> Profile {
        Profile {
            id: 7,
            user_id: 1,
            experience_level: ExperienceLevel::Intermediate,
            investment_goal: InvestmentGoal::HomePurchase,
            financial_goal: Some(FinancialGoal::Travel),
            preferred_investment_types: BTreeSet::from([
                PreferredInvestmentType::Stocks,
                PreferredInvestmentType::Etfs,
            ]),
            target_amount: Some(dec!(50000)),
            target_date: NaiveDate::from_ymd_opt(2027, 3, 15),
            financial_goal_amount: Some(dec!(8000)),
            financial_goal_description: Some("Road trip fund".to_string()),
            progress_percentage: 35.0,
            days_until_goal: 120,
            is_goal_overdue: false,
            learning_progress: 2,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }
}
