//! Background spending simulator
//!
//! Emulates a live transaction feed. Every tick it picks one spending category
//! uniformly at random and, with the configured probability, records a small
//! purchase against it (and against the month's running total). Spending only
//! ever grows; nothing fires until onboarding has completed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::SimulatorConfig;
use crate::models::SpendingCategory;
use crate::store::{Action, AppState, SpendingPatch, StoreHandle};

/// One random purchase, not yet bound to a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purchase {
    pub category: SpendingCategory,
    pub amount: f64,
}

impl Purchase {
    /// The spending update that records this purchase on top of `state`
    ///
    /// `None` while the profile is unset.
    pub fn into_action(self, state: &AppState) -> Option<Action> {
        if !state.is_onboarded() {
            return None;
        }

        let spent = state.spending.category(self.category).spent + self.amount;
        let patch = SpendingPatch::category_spent(self.category, spent)
            .with_current_month(state.spending.current_month + self.amount);

        Some(Action::UpdateSpending { spending: patch })
    }
}

/// Random source for simulated purchases
#[derive(Debug)]
pub struct SpendingSimulator<R = StdRng> {
    rng: R,
    probability: f64,
    max_increment: u32,
}

impl SpendingSimulator<StdRng> {
    pub fn new(config: &SimulatorConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), config)
    }

    /// Deterministic simulator for reproducible runs
    pub fn seeded(seed: u64, config: &SimulatorConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> SpendingSimulator<R> {
    pub fn with_rng(rng: R, config: &SimulatorConfig) -> Self {
        Self {
            rng,
            probability: config.probability.clamp(0.0, 1.0),
            max_increment: config.max_increment.max(1),
        }
    }

    /// Roll one tick: `None` means nothing was bought
    pub fn roll(&mut self) -> Option<Purchase> {
        let category = *SpendingCategory::ALL.choose(&mut self.rng)?;
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        let amount = self.rng.gen_range(0..self.max_increment);

        Some(Purchase {
            category,
            amount: f64::from(amount),
        })
    }

    /// Roll one tick against a known state
    pub fn tick(&mut self, state: &AppState) -> Option<Action> {
        self.roll().and_then(|purchase| purchase.into_action(state))
    }
}

/// Start the simulator as a background task feeding `store`
///
/// The task stops when `shutdown` flips to true (or its sender is dropped) or
/// once the store is closed.
pub fn spawn(
    store: StoreHandle,
    config: SimulatorConfig,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    info!(
        "Starting spending simulator: every {:?}, p={}",
        config.interval, config.probability
    );

    tokio::spawn(async move {
        let mut simulator = SpendingSimulator::new(&config);
        let mut ticker = interval(config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Skip the first immediate tick
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
                _ = ticker.tick() => {}
            }

            let Some(purchase) = simulator.roll() else {
                continue;
            };
            debug!("Simulated purchase: {} +{}", purchase.category, purchase.amount);

            if store
                .dispatch_with(move |state| purchase.into_action(state))
                .await
                .is_err()
            {
                debug!("Store closed, simulator exiting");
                break;
            }
        }

        info!("Spending simulator stopped");
    })
}
