//! Spending simulator command

use anyhow::Result;
use fifi_core::{Config, SpendingSimulator, Store, SurveyAnswers};
use tracing::debug;

use super::money;

/// Outcome of a simulated run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub ticks: u32,
    pub purchases: u32,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

/// Onboard `answers`, then run `ticks` simulator ticks back to back
///
/// The store's own background simulator stays off; ticks here are driven
/// synchronously so a seed gives a reproducible run.
pub async fn run_simulation(
    config: &Config,
    answers: &SurveyAnswers,
    ticks: u32,
    seed: Option<u64>,
) -> Result<SimulationReport> {
    let mut engine = config.clone();
    engine.simulator.enabled = false;

    let store = Store::spawn(&engine);
    let handle = store.handle();
    handle.onboard(answers).await?;

    let mut simulator = match seed {
        Some(seed) => SpendingSimulator::seeded(seed, &config.simulator),
        None => SpendingSimulator::new(&config.simulator),
    };

    let mut purchases = 0;
    for tick in 0..ticks {
        let Some(purchase) = simulator.roll() else {
            continue;
        };
        debug!(
            "Tick {}: {} +{}",
            tick + 1,
            purchase.category,
            purchase.amount
        );
        handle
            .dispatch_with(move |state| purchase.into_action(state))
            .await?;
        purchases += 1;
    }

    let state = handle.snapshot();
    store.shutdown().await;

    Ok(SimulationReport {
        ticks,
        purchases,
        budget: state.spending.budget,
        spent: state.spending.current_month,
        remaining: state.spending.remaining,
    })
}

pub async fn cmd_simulate(
    config: &Config,
    answers: &SurveyAnswers,
    ticks: u32,
    seed: Option<u64>,
) -> Result<()> {
    let report = run_simulation(config, answers, ticks, seed).await?;

    println!();
    println!("🎲 Spending Simulation");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Ticks:       {}", report.ticks);
    println!(
        "   Purchases:   {} (p = {:.2})",
        report.purchases, config.simulator.probability
    );
    println!("   Budget:      {}", money(report.budget));
    println!("   Spent:       {}", money(report.spent));
    println!("   Remaining:   {}", money(report.remaining));
    if let Some(seed) = seed {
        println!("   Seed:        {}", seed);
    }
    println!();
    Ok(())
}
