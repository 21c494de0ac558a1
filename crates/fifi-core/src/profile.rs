//! Profile deriver
//!
//! Turns raw onboarding survey answers into a normalized [`UserProfile`].
//! Derivation is pure and total: numeric fields that are missing, malformed,
//! negative or non-finite count as zero, and enum fields that don't parse stay
//! unset. Form validation happens before this runs; this layer never fails.

use serde::{Deserialize, Serialize};

use crate::models::{
    AgeRange, Employment, Experience, PrimaryGoal, RiskTolerance, UserProfile, UserType,
};
use crate::store::ProfilePatch;

/// Name used when the survey is completed without one
pub const DEFAULT_NAME: &str = "Demo User";

/// Emergency fund target in months of expenses
pub const EMERGENCY_FUND_MONTHS: f64 = 4.0;

/// Raw onboarding answers as collected by a form
///
/// Numbers stay strings here; parsing them is the deriver's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub name: String,
    pub email: String,
    pub age: Option<AgeRange>,
    pub employment: Option<Employment>,
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub current_savings: String,
    pub debt_amount: String,
    pub financial_goals: Vec<PrimaryGoal>,
    pub experience: Option<Experience>,
    pub risk_tolerance: Option<RiskTolerance>,
}

impl SurveyAnswers {
    /// Sample answers used by demo mode
    pub fn demo() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: "demo@fifi.com".to_string(),
            age: Some(AgeRange::Age25To34),
            employment: Some(Employment::Fulltime),
            monthly_income: "5000".to_string(),
            monthly_expenses: "3500".to_string(),
            current_savings: "2000".to_string(),
            debt_amount: "5000".to_string(),
            financial_goals: vec![
                PrimaryGoal::EmergencyFund,
                PrimaryGoal::Savings,
                PrimaryGoal::Budgeting,
            ],
            experience: Some(Experience::Beginner),
            risk_tolerance: Some(RiskTolerance::Moderate),
        }
    }
}

/// Parse a survey amount, treating anything unusable as zero
///
/// Accepts surrounding whitespace, a leading `$`, and thousands separators.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Classify a user by employment
pub fn user_type_for(employment: Option<Employment>) -> UserType {
    match employment {
        Some(Employment::Student) => UserType::Student,
        Some(Employment::Freelance) => UserType::Freelancer,
        Some(Employment::Entrepreneur) => UserType::Entrepreneur,
        _ => UserType::Standard,
    }
}

/// Keep at most three goals, dropping duplicates in selection order
fn normalize_goals(goals: &[PrimaryGoal]) -> Vec<PrimaryGoal> {
    let mut kept: Vec<PrimaryGoal> = Vec::with_capacity(PrimaryGoal::MAX_SELECTED);
    for goal in goals {
        if kept.len() == PrimaryGoal::MAX_SELECTED {
            break;
        }
        if !kept.contains(goal) {
            kept.push(*goal);
        }
    }
    kept
}

/// Derive a normalized profile from survey answers
pub fn derive(answers: &SurveyAnswers) -> UserProfile {
    let monthly_income = parse_amount(&answers.monthly_income);
    let monthly_expenses = parse_amount(&answers.monthly_expenses);
    let current_savings = parse_amount(&answers.current_savings);
    let debt_amount = parse_amount(&answers.debt_amount);

    let name = if answers.name.trim().is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        answers.name.trim().to_string()
    };

    UserProfile {
        name,
        email: answers.email.trim().to_string(),
        user_type: user_type_for(answers.employment),
        monthly_income,
        monthly_expenses,
        monthly_budget: monthly_income - monthly_expenses,
        current_savings,
        debt_amount,
        emergency_fund_target: monthly_expenses * EMERGENCY_FUND_MONTHS,
        emergency_fund_current: current_savings,
        experience: answers.experience,
        risk_tolerance: answers.risk_tolerance,
        primary_goals: normalize_goals(&answers.financial_goals),
        age: answers.age,
        employment: answers.employment,
        ..UserProfile::default()
    }
}

impl From<UserProfile> for ProfilePatch {
    /// Patch carrying every onboarding field of a derived profile
    ///
    /// Streak, level and the content creator are left out: onboarding never
    /// sets them.
    fn from(profile: UserProfile) -> Self {
        Self {
            name: Some(profile.name),
            email: Some(profile.email),
            user_type: Some(profile.user_type),
            monthly_income: Some(profile.monthly_income),
            monthly_expenses: Some(profile.monthly_expenses),
            monthly_budget: Some(profile.monthly_budget),
            current_savings: Some(profile.current_savings),
            debt_amount: Some(profile.debt_amount),
            emergency_fund_target: Some(profile.emergency_fund_target),
            experience: profile.experience,
            risk_tolerance: profile.risk_tolerance,
            primary_goals: Some(profile.primary_goals),
            age: profile.age,
            employment: profile.employment,
        }
    }
}
