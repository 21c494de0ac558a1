//! Pure state transitions
//!
//! `apply` never fails and never touches the outside world. Ids and timestamps
//! arrive already stamped on the action; see [`super::StoreHandle`].

use crate::models::{CategorySpending, Goal, UserProfile};

use super::action::{Action, GoalPatch, ProfilePatch, SpendingPatch};
use super::state::AppState;

/// Compute the state that follows `action`
///
/// Lookup misses (unknown goal or notification id) and [`Action::Unknown`]
/// return an unchanged copy of `state`.
pub fn apply(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::SetUserProfile { profile } => {
            if profile.is_empty() {
                return AppState::initial();
            }
            set_user_profile(&mut next, profile);
        }
        Action::UpdateSpending { spending } => update_spending(&mut next, spending),
        Action::AddGoal { goal } => next.goals.push(goal),
        Action::UpdateGoal { goal } => update_goal(&mut next.goals, goal),
        Action::UpdateEmergencyFund { amount } => next.user.emergency_fund_current = amount,
        Action::UpdateStreak { streak } => next.user.streak = streak,
        Action::SetContentCreator { creator } => next.user.selected_content_creator = creator,
        Action::AddNotification { notification } => next.notifications.insert(0, notification),
        Action::MarkNotificationRead { id } => {
            if let Some(n) = next.notifications.iter_mut().find(|n| n.id == id) {
                n.read = true;
            }
        }
        Action::Unknown => {}
    }

    next
}

fn set_user_profile(state: &mut AppState, patch: ProfilePatch) {
    // The emergency fund and the spending budget are re-derived from the patch
    // itself, so a patch without savings or budget zeroes them.
    let current_savings = patch.current_savings.unwrap_or(0.0);
    let budget = patch.monthly_budget.unwrap_or(0.0);

    merge_profile(&mut state.user, patch);
    state.user.emergency_fund_current = current_savings;

    state.spending.budget = budget;
    state.spending.remaining = budget - state.spending.current_month;
}

fn merge_profile(user: &mut UserProfile, patch: ProfilePatch) {
    let ProfilePatch {
        name,
        email,
        user_type,
        monthly_income,
        monthly_expenses,
        monthly_budget,
        current_savings,
        debt_amount,
        emergency_fund_target,
        experience,
        risk_tolerance,
        primary_goals,
        age,
        employment,
    } = patch;

    if let Some(v) = name {
        user.name = v;
    }
    if let Some(v) = email {
        user.email = v;
    }
    if let Some(v) = user_type {
        user.user_type = v;
    }
    if let Some(v) = monthly_income {
        user.monthly_income = v;
    }
    if let Some(v) = monthly_expenses {
        user.monthly_expenses = v;
    }
    if let Some(v) = monthly_budget {
        user.monthly_budget = v;
    }
    if let Some(v) = current_savings {
        user.current_savings = v;
    }
    if let Some(v) = debt_amount {
        user.debt_amount = v;
    }
    if let Some(v) = emergency_fund_target {
        user.emergency_fund_target = v;
    }
    if experience.is_some() {
        user.experience = experience;
    }
    if risk_tolerance.is_some() {
        user.risk_tolerance = risk_tolerance;
    }
    if let Some(v) = primary_goals {
        user.primary_goals = v;
    }
    if age.is_some() {
        user.age = age;
    }
    if employment.is_some() {
        user.employment = employment;
    }
}

fn update_spending(state: &mut AppState, patch: SpendingPatch) {
    let spending = &mut state.spending;

    if let Some(total) = patch.current_month {
        spending.current_month = total;
        spending.remaining = spending.budget - total;
    }

    for (category, change) in patch.categories {
        let existing = spending.categories.get(&category).copied().unwrap_or_default();
        let spent = change.spent.unwrap_or(existing.spent);
        let budget = change.budget.unwrap_or(existing.budget);
        spending
            .categories
            .insert(category, CategorySpending::new(spent, budget));
    }
}

fn update_goal(goals: &mut [Goal], patch: GoalPatch) {
    let Some(goal) = goals.iter_mut().find(|g| g.id == patch.id) else {
        return;
    };

    if let Some(v) = patch.name {
        goal.name = v;
    }
    if let Some(v) = patch.target_amount {
        goal.target_amount = v;
    }
    if let Some(v) = patch.current_amount {
        goal.current_amount = v;
    }
    if patch.deadline.is_some() {
        goal.deadline = patch.deadline;
    }
    if let Some(v) = patch.priority {
        goal.priority = v;
    }
    if let Some(v) = patch.category {
        goal.category = v;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{
        BudgetStatus, ContentCreator, GoalCategory, GoalPriority, Notification, NotificationKind,
        NotificationPayload, RiskTolerance, SpendingCategory, UserType,
    };
    use crate::profile::{derive, SurveyAnswers};
    use crate::store::CategoryPatch;

    fn onboarded() -> AppState {
        let patch: ProfilePatch = derive(&SurveyAnswers::demo()).into();
        apply(
            &AppState::initial(),
            Action::SetUserProfile { profile: patch },
        )
    }

    fn goal(id: u64, name: &str) -> Goal {
        Goal {
            id,
            name: name.to_string(),
            target_amount: 1000.0,
            current_amount: 0.0,
            deadline: None,
            priority: GoalPriority::Medium,
            category: GoalCategory::Savings,
            created_at: Utc::now(),
        }
    }

    fn notification(id: u64) -> Notification {
        Notification {
            id,
            payload: NotificationPayload {
                kind: NotificationKind::Info,
                title: format!("Notice {}", id),
                message: String::new(),
            },
            timestamp: Utc::now(),
            read: false,
        }
    }

    #[test]
    fn test_set_profile_derives_fund_and_budget() {
        let state = onboarded();
        assert_eq!(state.user.user_type, UserType::Standard);
        assert_eq!(state.user.emergency_fund_current, 2000.0);
        assert_eq!(state.spending.budget, 1500.0);
        assert_eq!(state.spending.remaining, 1500.0);
        assert_eq!(state.user.level, 1);
    }

    #[test]
    fn test_set_profile_merges_partial_patch() {
        let state = onboarded();
        let next = apply(
            &state,
            Action::SetUserProfile {
                profile: ProfilePatch {
                    name: Some("Riley".to_string()),
                    current_savings: Some(2500.0),
                    monthly_budget: Some(1200.0),
                    ..Default::default()
                },
            },
        );

        assert_eq!(next.user.name, "Riley");
        assert_eq!(next.user.monthly_income, 5000.0);
        assert_eq!(next.user.emergency_fund_current, 2500.0);
        assert_eq!(next.spending.budget, 1200.0);
    }

    #[test]
    fn test_set_profile_without_savings_zeroes_fund() {
        let state = onboarded();
        let next = apply(
            &state,
            Action::SetUserProfile {
                profile: ProfilePatch {
                    name: Some("Riley".to_string()),
                    ..Default::default()
                },
            },
        );
        assert_eq!(next.user.emergency_fund_current, 0.0);
        assert_eq!(next.spending.budget, 0.0);
        // The stored savings figure itself is untouched
        assert_eq!(next.user.current_savings, 2000.0);
    }

    #[test]
    fn test_empty_profile_resets_everything() {
        let mut state = onboarded();
        state = apply(&state, Action::AddGoal { goal: goal(1, "Car") });
        state = apply(
            &state,
            Action::AddNotification {
                notification: notification(2),
            },
        );
        state = apply(&state, Action::UpdateStreak { streak: 7 });

        let reset = apply(
            &state,
            Action::SetUserProfile {
                profile: ProfilePatch::empty(),
            },
        );
        assert_eq!(reset, AppState::initial());
    }

    #[test]
    fn test_add_then_update_goal() {
        let state = apply(&onboarded(), Action::AddGoal { goal: goal(10, "Trip") });
        let next = apply(
            &state,
            Action::UpdateGoal {
                goal: GoalPatch {
                    current_amount: Some(400.0),
                    ..GoalPatch::new(10)
                },
            },
        );

        let updated = next.goal(10).unwrap();
        assert_eq!(updated.current_amount, 400.0);
        assert_eq!(updated.name, "Trip");
        assert_eq!(updated.target_amount, 1000.0);
    }

    #[test]
    fn test_update_missing_goal_is_noop() {
        let state = apply(&onboarded(), Action::AddGoal { goal: goal(10, "Trip") });
        let next = apply(
            &state,
            Action::UpdateGoal {
                goal: GoalPatch {
                    name: Some("Ghost".to_string()),
                    ..GoalPatch::new(99)
                },
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_notifications_newest_first_and_mark_read() {
        let mut state = onboarded();
        state = apply(
            &state,
            Action::AddNotification {
                notification: notification(1),
            },
        );
        state = apply(
            &state,
            Action::AddNotification {
                notification: notification(2),
            },
        );
        assert_eq!(state.notifications[0].id, 2);
        assert_eq!(state.unread_notifications(), 2);

        let next = apply(&state, Action::MarkNotificationRead { id: 1 });
        assert!(next.notification(1).unwrap().read);
        assert!(!next.notification(2).unwrap().read);

        let unchanged = apply(&next, Action::MarkNotificationRead { id: 42 });
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_update_spending_merges_category_and_recomputes_status() {
        let state = onboarded();
        let mut patch = SpendingPatch::category_spent(SpendingCategory::Food, 80.0);
        patch.categories.insert(
            SpendingCategory::Transport,
            CategoryPatch {
                spent: None,
                budget: Some(200.0),
            },
        );
        let next = apply(
            &state,
            Action::UpdateSpending {
                spending: SpendingPatch {
                    current_month: Some(80.0),
                    ..patch
                },
            },
        );

        assert_eq!(next.spending.current_month, 80.0);
        assert_eq!(next.spending.remaining, 1420.0);
        let food = next.spending.category(SpendingCategory::Food);
        assert_eq!(food.spent, 80.0);
        assert_eq!(food.status, BudgetStatus::Danger);
        let transport = next.spending.category(SpendingCategory::Transport);
        assert_eq!(transport.budget, 200.0);
        assert_eq!(transport.status, BudgetStatus::Safe);
        // Categories not in the patch are untouched
        assert_eq!(
            next.spending.category(SpendingCategory::Other),
            state.spending.category(SpendingCategory::Other)
        );
    }

    #[test]
    fn test_scalar_updates() {
        let state = onboarded();
        let creator = ContentCreator {
            id: 1,
            name: "Saver".to_string(),
            platform: "YouTube".to_string(),
            followers: "1M".to_string(),
            philosophy: "Spend less".to_string(),
            approach: RiskTolerance::Conservative,
            description: String::new(),
        };

        let next = apply(&state, Action::UpdateEmergencyFund { amount: 14000.0 });
        assert_eq!(next.user.emergency_fund_current, 14000.0);

        let next = apply(&next, Action::UpdateStreak { streak: 3 });
        assert_eq!(next.user.streak, 3);

        let next = apply(
            &next,
            Action::SetContentCreator {
                creator: Some(creator.clone()),
            },
        );
        assert_eq!(next.user.selected_content_creator, Some(creator));

        let next = apply(&next, Action::SetContentCreator { creator: None });
        assert_eq!(next.user.selected_content_creator, None);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let state = onboarded();
        assert_eq!(apply(&state, Action::Unknown), state);
    }
}
