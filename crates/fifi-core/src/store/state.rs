//! Store state snapshot

use serde::{Deserialize, Serialize};

use crate::models::{Goal, Notification, SpendingState, Subscription, UserProfile};

/// Everything the store owns for one session
///
/// Snapshots are immutable once published; the reducer builds a new value for
/// every transition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub user: UserProfile,
    pub spending: SpendingState,
    pub goals: Vec<Goal>,
    pub subscriptions: Vec<Subscription>,
    /// Newest first
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Fresh session: no profile, empty collections, zeroed spending
    pub fn initial() -> Self {
        Self::default()
    }

    /// Seed subscriptions (there is no transition that adds them)
    pub fn with_subscriptions(mut self, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    /// Whether onboarding has completed
    pub fn is_onboarded(&self) -> bool {
        self.user.user_type.is_set()
    }

    pub fn goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn notification(&self, id: u64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
