//! Single-writer store task
//!
//! All transitions funnel through one bounded queue consumed by one task, so
//! they are applied strictly in arrival order and never overlap. Readers get
//! `Arc<AppState>` snapshots through a watch channel and never block writers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{ContentCreator, Goal, NewGoal, Notification, NotificationPayload};
use crate::profile::{self, SurveyAnswers};
use crate::simulator;

use super::action::{Action, GoalPatch, ProfilePatch, SpendingPatch};
use super::reducer;
use super::state::AppState;

/// Builds an action from the state current at the moment it is applied
pub type Producer = Box<dyn FnOnce(&AppState) -> Option<Action> + Send>;

enum Command {
    Apply {
        action: Action,
        reply: oneshot::Sender<Arc<AppState>>,
    },
    Deferred {
        producer: Producer,
        reply: oneshot::Sender<Arc<AppState>>,
    },
}

/// Cloneable sender side of the store
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Arc<AppState>>,
    ids: Arc<AtomicU64>,
}

impl StoreHandle {
    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<AppState> {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified after every applied transition
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.snapshots.clone()
    }

    /// Next session-unique id (never reused, even across resets)
    pub fn next_id(&self) -> u64 {
        self.ids.fetch_add(1, Ordering::Relaxed)
    }

    /// Enqueue an action and wait for the resulting snapshot
    ///
    /// Goal and notification ids, timestamps, a new goal's zero progress and
    /// the notification read flag are assigned here; whatever the caller put
    /// in them is overwritten.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<AppState>> {
        let action = self.stamp(action);
        self.send(action).await
    }

    /// Enqueue a producer that sees the state current when it runs
    ///
    /// Use this for read-modify-write updates. Returning `None` skips the
    /// transition; the reply is then the unchanged snapshot.
    pub async fn dispatch_with<F>(&self, producer: F) -> Result<Arc<AppState>>
    where
        F: FnOnce(&AppState) -> Option<Action> + Send + 'static,
    {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Deferred {
                producer: Box::new(producer),
                reply,
            })
            .await
            .map_err(|_| Error::StoreClosed)?;
        rx.await.map_err(|_| Error::StoreClosed)
    }

    async fn send(&self, action: Action) -> Result<Arc<AppState>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Apply { action, reply })
            .await
            .map_err(|_| Error::StoreClosed)?;
        rx.await.map_err(|_| Error::StoreClosed)
    }

    fn stamp(&self, action: Action) -> Action {
        match action {
            Action::AddGoal { mut goal } => {
                goal.id = self.next_id();
                goal.current_amount = 0.0;
                goal.created_at = Utc::now();
                Action::AddGoal { goal }
            }
            Action::AddNotification { mut notification } => {
                notification.id = self.next_id();
                notification.timestamp = Utc::now();
                notification.read = false;
                Action::AddNotification { notification }
            }
            other => other,
        }
    }

    pub async fn set_user_profile(&self, patch: ProfilePatch) -> Result<Arc<AppState>> {
        self.send(Action::SetUserProfile { profile: patch }).await
    }

    /// Sign out: return the store to its initial state
    pub async fn reset(&self) -> Result<Arc<AppState>> {
        self.set_user_profile(ProfilePatch::empty()).await
    }

    /// Derive a profile from survey answers and install it
    pub async fn onboard(&self, answers: &SurveyAnswers) -> Result<Arc<AppState>> {
        let derived = profile::derive(answers);
        info!("Onboarding {} as {}", derived.name, derived.user_type);
        self.set_user_profile(derived.into()).await
    }

    pub async fn update_spending(&self, patch: SpendingPatch) -> Result<Arc<AppState>> {
        self.send(Action::UpdateSpending { spending: patch }).await
    }

    /// Add a goal and return it with its assigned id
    pub async fn add_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let goal = Goal {
            id: self.next_id(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: 0.0,
            deadline: new_goal.deadline,
            priority: new_goal.priority,
            category: new_goal.category,
            created_at: Utc::now(),
        };
        self.send(Action::AddGoal { goal: goal.clone() }).await?;
        Ok(goal)
    }

    pub async fn update_goal(&self, patch: GoalPatch) -> Result<Arc<AppState>> {
        self.send(Action::UpdateGoal { goal: patch }).await
    }

    pub async fn update_emergency_fund(&self, amount: f64) -> Result<Arc<AppState>> {
        self.send(Action::UpdateEmergencyFund { amount }).await
    }

    pub async fn update_streak(&self, streak: u32) -> Result<Arc<AppState>> {
        self.send(Action::UpdateStreak { streak }).await
    }

    pub async fn set_content_creator(
        &self,
        creator: Option<ContentCreator>,
    ) -> Result<Arc<AppState>> {
        self.send(Action::SetContentCreator { creator }).await
    }

    /// Queue a notification and return it with its assigned id
    pub async fn add_notification(&self, payload: NotificationPayload) -> Result<Notification> {
        let notification = Notification {
            id: self.next_id(),
            payload,
            timestamp: Utc::now(),
            read: false,
        };
        self.send(Action::AddNotification {
            notification: notification.clone(),
        })
        .await?;
        Ok(notification)
    }

    pub async fn mark_notification_read(&self, id: u64) -> Result<Arc<AppState>> {
        self.send(Action::MarkNotificationRead { id }).await
    }
}

/// Owner of the store task and, when enabled, the spending simulator
///
/// Dropping a `Store` without calling [`Store::shutdown`] aborts both tasks.
pub struct Store {
    handle: StoreHandle,
    shutdown: watch::Sender<bool>,
    consumer: Option<JoinHandle<()>>,
    simulator: Option<JoinHandle<()>>,
}

impl Store {
    /// Start a store with the initial state
    pub fn spawn(config: &Config) -> Self {
        Self::spawn_with_state(AppState::initial(), config)
    }

    /// Start a store seeded with `initial`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_with_state(initial: AppState, config: &Config) -> Self {
        let (tx, rx) = mpsc::channel(config.store.queue_capacity.max(1));
        let (state_tx, snapshots) = watch::channel(Arc::new(initial));
        let (shutdown, shutdown_rx) = watch::channel(false);

        let consumer = tokio::spawn(run_consumer(rx, state_tx, shutdown_rx.clone()));

        let handle = StoreHandle {
            tx,
            snapshots,
            ids: Arc::new(AtomicU64::new(1)),
        };

        let simulator = if config.simulator.enabled {
            Some(simulator::spawn(
                handle.clone(),
                config.simulator.clone(),
                shutdown_rx,
            ))
        } else {
            debug!("Spending simulator disabled");
            None
        };

        Self {
            handle,
            shutdown,
            consumer: Some(consumer),
            simulator,
        }
    }

    pub fn handle(&self) -> StoreHandle {
        self.handle.clone()
    }

    /// Stop the simulator, then the store task
    ///
    /// Transitions already applied stay applied; anything still queued is
    /// dropped and its sender gets [`Error::StoreClosed`].
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);

        if let Some(task) = self.simulator.take() {
            if let Err(e) = task.await {
                warn!("Simulator task ended abnormally: {}", e);
            }
        }
        if let Some(task) = self.consumer.take() {
            if let Err(e) = task.await {
                warn!("Store task ended abnormally: {}", e);
            }
        }
        info!("Store shut down");
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Some(task) = self.simulator.take() {
            task.abort();
        }
        if let Some(task) = self.consumer.take() {
            task.abort();
        }
    }
}

async fn run_consumer(
    mut rx: mpsc::Receiver<Command>,
    state_tx: watch::Sender<Arc<AppState>>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut current = state_tx.borrow().clone();

    loop {
        let command = tokio::select! {
            _ = shutdown.changed() => break,
            command = rx.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        let (action, reply) = match command {
            Command::Apply { action, reply } => (Some(action), reply),
            Command::Deferred { producer, reply } => (producer(&current), reply),
        };

        if let Some(action) = action {
            debug!("Applying {}", action.name());
            current = Arc::new(reducer::apply(&current, action));
            state_tx.send_replace(current.clone());
        }

        // The caller may have given up waiting; that's fine
        let _ = reply.send(current.clone());
    }

    rx.close();
    debug!("Store task stopped");
}
