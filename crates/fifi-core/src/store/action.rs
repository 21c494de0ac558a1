//! Store transitions and the typed patches they carry

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{
    AgeRange, ContentCreator, Employment, Experience, Goal, GoalCategory, GoalPriority,
    Notification, PrimaryGoal, RiskTolerance, SpendingCategory, UserType,
};

/// Partial profile update
///
/// An entirely empty patch is the sign-out sentinel: applying it resets the
/// whole store instead of merging nothing. Only `{}` deserializes to it;
/// unknown fields and explicit `null`s are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub monthly_expenses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub monthly_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub current_savings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub debt_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub emergency_fund_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub experience: Option<Experience>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub primary_goals: Option<Vec<PrimaryGoal>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub age: Option<AgeRange>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub employment: Option<Employment>,
}

/// A field that, when present, must carry a value
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ProfilePatch {
    /// The reset sentinel
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update of one spending category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryPatch {
    pub spent: Option<f64>,
    pub budget: Option<f64>,
}

/// Partial update of the spending ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpendingPatch {
    pub current_month: Option<f64>,
    pub categories: BTreeMap<SpendingCategory, CategoryPatch>,
}

impl SpendingPatch {
    /// Set one category's `spent` value
    pub fn category_spent(category: SpendingCategory, spent: f64) -> Self {
        let mut patch = Self::default();
        patch.categories.insert(
            category,
            CategoryPatch {
                spent: Some(spent),
                budget: None,
            },
        );
        patch
    }

    pub fn with_current_month(mut self, current_month: f64) -> Self {
        self.current_month = Some(current_month);
        self
    }
}

/// Partial update of a goal, matched by `id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoalPatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<GoalPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GoalCategory>,
}

impl GoalPatch {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// A named store transition
///
/// Serialized actions use an internal `type` tag. Any unrecognised `type`
/// deserializes to [`Action::Unknown`], which the reducer ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetUserProfile { profile: ProfilePatch },
    UpdateSpending { spending: SpendingPatch },
    AddGoal { goal: Goal },
    UpdateGoal { goal: GoalPatch },
    UpdateEmergencyFund { amount: f64 },
    UpdateStreak { streak: u32 },
    SetContentCreator { creator: Option<ContentCreator> },
    AddNotification { notification: Notification },
    MarkNotificationRead { id: u64 },
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Whether this is the sign-out sentinel (`set_user_profile` with `{}`)
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::SetUserProfile { profile } if profile.is_empty())
    }

    /// Transitions accepted before onboarding completes
    pub fn allowed_before_onboarding(&self) -> bool {
        matches!(self, Self::SetUserProfile { .. } | Self::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetUserProfile { .. } => "set_user_profile",
            Self::UpdateSpending { .. } => "update_spending",
            Self::AddGoal { .. } => "add_goal",
            Self::UpdateGoal { .. } => "update_goal",
            Self::UpdateEmergencyFund { .. } => "update_emergency_fund",
            Self::UpdateStreak { .. } => "update_streak",
            Self::SetContentCreator { .. } => "set_content_creator",
            Self::AddNotification { .. } => "add_notification",
            Self::MarkNotificationRead { .. } => "mark_notification_read",
            Self::Unknown => "unknown",
        }
    }
}
