//! Domain models for FiFi

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Coaching persona assigned at onboarding
///
/// `Unset` until the survey completes; every other surface is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Unset,
    Standard,
    Student,
    Freelancer,
    Entrepreneur,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Standard => "standard",
            Self::Student => "student",
            Self::Freelancer => "freelancer",
            Self::Entrepreneur => "entrepreneur",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employment status from the onboarding survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employment {
    Student,
    Fulltime,
    Parttime,
    Freelance,
    Entrepreneur,
    Unemployed,
}

impl Employment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Fulltime => "fulltime",
            Self::Parttime => "parttime",
            Self::Freelance => "freelance",
            Self::Entrepreneur => "entrepreneur",
            Self::Unemployed => "unemployed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Fulltime => "Full-time Employee",
            Self::Parttime => "Part-time Employee",
            Self::Freelance => "Freelancer/Contractor",
            Self::Entrepreneur => "Entrepreneur/Business Owner",
            Self::Unemployed => "Currently Unemployed",
        }
    }
}

impl std::str::FromStr for Employment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "fulltime" | "full-time" | "full_time" => Ok(Self::Fulltime),
            "parttime" | "part-time" | "part_time" => Ok(Self::Parttime),
            "freelance" | "freelancer" => Ok(Self::Freelance),
            "entrepreneur" => Ok(Self::Entrepreneur),
            "unemployed" => Ok(Self::Unemployed),
            _ => Err(format!("Unknown employment status: {}", s)),
        }
    }
}

impl std::fmt::Display for Employment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Self-reported personal finance experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "novice" => Ok(Self::Novice),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Unknown experience level: {}", s)),
        }
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Investment risk appetite (also used to describe content creator approaches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl std::str::FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(format!("Unknown risk tolerance: {}", s)),
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goal tags a user can pick during onboarding (up to three)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    EmergencyFund,
    DebtPayoff,
    Savings,
    Investment,
    Retirement,
    Budgeting,
}

impl PrimaryGoal {
    /// Maximum number of goals kept on a profile
    pub const MAX_SELECTED: usize = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "emergency_fund",
            Self::DebtPayoff => "debt_payoff",
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::Retirement => "retirement",
            Self::Budgeting => "budgeting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "Build Emergency Fund",
            Self::DebtPayoff => "Pay Off Debt",
            Self::Savings => "Save for Big Purchase",
            Self::Investment => "Start Investing",
            Self::Retirement => "Plan for Retirement",
            Self::Budgeting => "Learn Budgeting",
        }
    }
}

impl std::str::FromStr for PrimaryGoal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emergency_fund" | "emergency-fund" => Ok(Self::EmergencyFund),
            "debt_payoff" | "debt-payoff" => Ok(Self::DebtPayoff),
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            "retirement" => Ok(Self::Retirement),
            "budgeting" => Ok(Self::Budgeting),
            _ => Err(format!("Unknown financial goal: {}", s)),
        }
    }
}

impl std::fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age bucket from the onboarding survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-24")]
    Age18To24,
    #[serde(rename = "25-34")]
    Age25To34,
    #[serde(rename = "35-44")]
    Age35To44,
    #[serde(rename = "45-54")]
    Age45To54,
    #[serde(rename = "55+")]
    Age55Plus,
}

impl AgeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age18To24 => "18-24",
            Self::Age25To34 => "25-34",
            Self::Age35To44 => "35-44",
            Self::Age45To54 => "45-54",
            Self::Age55Plus => "55+",
        }
    }
}

impl std::str::FromStr for AgeRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "18-24" => Ok(Self::Age18To24),
            "25-34" => Ok(Self::Age25To34),
            "35-44" => Ok(Self::Age35To44),
            "45-54" => Ok(Self::Age45To54),
            "55+" => Ok(Self::Age55Plus),
            _ => Err(format!("Unknown age range: {}", s)),
        }
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial content creator whose philosophy the user follows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCreator {
    pub id: u32,
    pub name: String,
    pub platform: String,
    pub followers: String,
    pub philosophy: String,
    pub approach: RiskTolerance,
    pub description: String,
}

/// Normalized financial facts about a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Income minus expenses; negative means overspending
    pub monthly_budget: f64,
    pub current_savings: f64,
    pub debt_amount: f64,
    pub emergency_fund_target: f64,
    pub emergency_fund_current: f64,
    pub experience: Option<Experience>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub primary_goals: Vec<PrimaryGoal>,
    pub age: Option<AgeRange>,
    pub employment: Option<Employment>,
    /// Consecutive weeks on budget
    pub streak: u32,
    pub level: u32,
    pub selected_content_creator: Option<ContentCreator>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            user_type: UserType::Unset,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            monthly_budget: 0.0,
            current_savings: 0.0,
            debt_amount: 0.0,
            emergency_fund_target: 0.0,
            emergency_fund_current: 0.0,
            experience: None,
            risk_tolerance: None,
            primary_goals: Vec::new(),
            age: None,
            employment: None,
            streak: 0,
            level: 1,
            selected_content_creator: None,
        }
    }
}

/// Spending category tags (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Healthcare,
    Other,
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 7] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Shopping,
        Self::Healthcare,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Shopping => "shopping",
            Self::Healthcare => "healthcare",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for SpendingCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "shopping" => Ok(Self::Shopping),
            "healthcare" => Ok(Self::Healthcare),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown spending category: {}", s)),
        }
    }
}

impl std::fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget health of a category, derived from spent/budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    /// Ratio (percent) at which a category turns to warning
    pub const WARNING_PERCENT: f64 = 75.0;
    /// Ratio (percent) at which a category turns to danger
    pub const DANGER_PERCENT: f64 = 90.0;

    /// Classify spending against a budget
    ///
    /// A zero or negative budget has no meaningful ratio: it stays safe until
    /// anything is spent, then it is in danger.
    pub fn classify(spent: f64, budget: f64) -> Self {
        if budget <= 0.0 {
            return if spent > 0.0 { Self::Danger } else { Self::Safe };
        }

        let percent = spent / budget * 100.0;
        if percent >= Self::DANGER_PERCENT {
            Self::Danger
        } else if percent >= Self::WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending within one category this month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CategorySpending {
    pub spent: f64,
    pub budget: f64,
    pub status: BudgetStatus,
}

impl CategorySpending {
    pub fn new(spent: f64, budget: f64) -> Self {
        Self {
            spent,
            budget,
            status: BudgetStatus::classify(spent, budget),
        }
    }
}

/// Running spending ledger for the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingState {
    /// Running total for the month
    pub current_month: f64,
    /// Mirrors the profile's monthly budget
    pub budget: f64,
    /// Budget minus current month spending
    pub remaining: f64,
    pub categories: BTreeMap<SpendingCategory, CategorySpending>,
}

impl Default for SpendingState {
    fn default() -> Self {
        Self {
            current_month: 0.0,
            budget: 0.0,
            remaining: 0.0,
            categories: SpendingCategory::ALL
                .iter()
                .map(|c| (*c, CategorySpending::default()))
                .collect(),
        }
    }
}

impl SpendingState {
    /// Sum of `spent` across all categories
    pub fn total_category_spent(&self) -> f64 {
        self.categories.values().map(|c| c.spent).sum()
    }

    pub fn category(&self, category: SpendingCategory) -> CategorySpending {
        self.categories.get(&category).copied().unwrap_or_default()
    }
}

/// Goal urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown goal priority: {}", s)),
        }
    }
}

/// What a savings goal is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    #[default]
    Savings,
    Travel,
    Debt,
    Investment,
    Education,
    Home,
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Travel => "travel",
            Self::Debt => "debt",
            Self::Investment => "investment",
            Self::Education => "education",
            Self::Home => "home",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Travel => "Travel",
            Self::Debt => "Debt Repayment",
            Self::Investment => "Investment",
            Self::Education => "Education",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "travel" => Ok(Self::Travel),
            "debt" => Ok(Self::Debt),
            "investment" => Ok(Self::Investment),
            "education" => Ok(Self::Education),
            "home" => Ok(Self::Home),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown goal category: {}", s)),
        }
    }
}

/// Display tier for goal progress bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalProgressTier {
    /// 100% or more
    Complete,
    /// 75% or more
    Close,
    /// 50% or more
    Halfway,
    Started,
}

/// A user savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Assigned by the store when the goal is added
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Fraction complete, clamped to [0, 1] for progress bars
    pub fn progress(&self) -> f64 {
        self.raw_progress().clamp(0.0, 1.0)
    }

    /// Unclamped percentage for text ("125% of target")
    pub fn progress_percent(&self) -> f64 {
        self.raw_progress() * 100.0
    }

    pub fn progress_tier(&self) -> GoalProgressTier {
        let percent = self.progress_percent();
        if percent >= 100.0 {
            GoalProgressTier::Complete
        } else if percent >= 75.0 {
            GoalProgressTier::Close
        } else if percent >= 50.0 {
            GoalProgressTier::Halfway
        } else {
            GoalProgressTier::Started
        }
    }

    fn raw_progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        self.current_amount / self.target_amount
    }
}

/// A goal to be added (before the store assigns an id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: GoalPriority,
    #[serde(default)]
    pub category: GoalCategory,
}

/// Subscription status as flagged by the account feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    FreeTrial,
    Suspicious,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::FreeTrial => "free_trial",
            Self::Suspicious => "suspicious",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::FreeTrial => "Free Trial",
            Self::Suspicious => "Suspicious",
        }
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "free_trial" | "trial" => Ok(Self::FreeTrial),
            "suspicious" => Ok(Self::Suspicious),
            _ => Err(format!("Unknown subscription status: {}", s)),
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring monthly charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Monthly cost
    pub cost: f64,
    pub status: SubscriptionStatus,
    pub next_billing: NaiveDate,
}

/// Counts and spend across a subscription list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubscriptionSummary {
    pub active: usize,
    pub free_trial: usize,
    pub suspicious: usize,
    /// Monthly cost of active subscriptions only
    pub total_monthly_cost: f64,
}

impl SubscriptionSummary {
    pub fn from_subscriptions(subscriptions: &[Subscription]) -> Self {
        let mut summary = Self::default();
        for sub in subscriptions {
            match sub.status {
                SubscriptionStatus::Active => {
                    summary.active += 1;
                    summary.total_monthly_cost += sub.cost;
                }
                SubscriptionStatus::FreeTrial => summary.free_trial += 1,
                SubscriptionStatus::Suspicious => summary.suspicious += 1,
            }
        }
        summary
    }
}

/// Filter subscriptions by status (`None` keeps all)
pub fn filter_subscriptions(
    subscriptions: &[Subscription],
    status: Option<SubscriptionStatus>,
) -> Vec<Subscription> {
    subscriptions
        .iter()
        .filter(|s| status.map_or(true, |wanted| s.status == wanted))
        .cloned()
        .collect()
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Alert,
}

/// What a notification says
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
}

/// A queued user notification (newest first in the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: u64,
    pub payload: NotificationPayload,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Advisor,
}

/// One message in the advisor chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
