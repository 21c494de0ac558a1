//! Home dashboard: daily greeting and financial snapshot

use serde::{Deserialize, Serialize};

use crate::gate;
use crate::models::{SpendingState, SubscriptionSummary, UserProfile, UserType};
use crate::store::AppState;

/// Percent of budget used above which the greeting warns
pub const WARNING_PERCENT: f64 = 90.0;
/// Percent of budget used above which standard users get a nudge
pub const NUDGE_PERCENT: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Warning,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub tone: Tone,
    pub message: String,
}

impl Greeting {
    fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Share of the monthly budget already spent, in percent
///
/// With no positive budget there is no ratio; any spending (or a negative
/// budget) reads as fully used. A negative budget counts as fully used even
/// with nothing spent, so an overspender sees the warning greeting from day
/// one instead of the under-budget one.
pub fn budget_used_percent(spent: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        spent / budget * 100.0
    } else if budget < 0.0 || spent > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Personalized greeting for the user type and this month's spending
pub fn greeting(user: &UserProfile, spending: &SpendingState) -> Greeting {
    let spent = spending.current_month;
    let budget = user.monthly_budget;
    let remaining = budget - spent;
    let used = budget_used_percent(spent, budget);
    let over = used > WARNING_PERCENT;

    match user.user_type {
        UserType::Student if over => Greeting::new(
            Tone::Warning,
            "Hey there! As a student, it's super important to watch your spending. Let's find some budget-friendly alternatives!",
        ),
        UserType::Student => Greeting::new(
            Tone::Positive,
            format!(
                "Great job managing your student budget! You still have ${:.0} for the month.",
                remaining
            ),
        ),
        UserType::Freelancer if over => Greeting::new(
            Tone::Warning,
            "Freelancer life can be unpredictable! Let's review your spending and plan for variable income months.",
        ),
        UserType::Freelancer => Greeting::new(
            Tone::Positive,
            format!(
                "Excellent work managing your freelance income! You have ${:.0} remaining this month.",
                remaining
            ),
        ),
        UserType::Entrepreneur if over => Greeting::new(
            Tone::Warning,
            "Business owner alert! Let's optimize your personal spending to keep more capital in your business.",
        ),
        UserType::Entrepreneur => Greeting::new(
            Tone::Positive,
            format!(
                "Smart business thinking! You have ${:.0} for personal expenses this month.",
                remaining
            ),
        ),
        _ if over => Greeting::new(
            Tone::Warning,
            "You're approaching your monthly budget limit. Let's review your spending together!",
        ),
        _ if used > NUDGE_PERCENT => Greeting::new(
            Tone::Neutral,
            "You're doing well with your budget, but there's room for optimization. Want some tips?",
        ),
        _ => Greeting::new(
            Tone::Positive,
            format!(
                "Great job staying under budget! You still have ${:.0} remaining this month.",
                remaining
            ),
        ),
    }
}

/// Everything the home screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub greeting: Greeting,
    pub monthly_budget: f64,
    pub spent_this_month: f64,
    pub remaining: f64,
    pub spending: SpendingState,
    pub emergency_fund_current: f64,
    pub emergency_fund_target: f64,
    pub emergency_fund_percent: f64,
    pub investing_unlocked: bool,
    pub streak: u32,
    pub level: u32,
    pub goals: usize,
    pub goals_completed: usize,
    pub unread_notifications: usize,
    pub subscriptions: SubscriptionSummary,
}

impl Dashboard {
    pub fn from_state(state: &AppState) -> Self {
        let user = &state.user;
        Self {
            name: user.name.clone(),
            greeting: greeting(user, &state.spending),
            monthly_budget: user.monthly_budget,
            spent_this_month: state.spending.current_month,
            remaining: user.monthly_budget - state.spending.current_month,
            spending: state.spending.clone(),
            emergency_fund_current: user.emergency_fund_current,
            emergency_fund_target: user.emergency_fund_target,
            emergency_fund_percent: gate::emergency_fund_percent(user),
            investing_unlocked: gate::is_investing_unlocked(user),
            streak: user.streak,
            level: user.level,
            goals: state.goals.len(),
            goals_completed: state
                .goals
                .iter()
                .filter(|g| g.progress_percent() >= 100.0)
                .count(),
            unread_notifications: state.unread_notifications(),
            subscriptions: SubscriptionSummary::from_subscriptions(&state.subscriptions),
        }
    }
}
