//! Dashboard command

use anyhow::Result;
use fifi_core::dashboard::Tone;
use fifi_core::models::{BudgetStatus, SpendingCategory};
use fifi_core::{Config, Dashboard, Store, SurveyAnswers};

use super::{money, progress_bar};

pub async fn cmd_dashboard(config: &Config, answers: &SurveyAnswers) -> Result<()> {
    let mut engine = config.clone();
    engine.simulator.enabled = false;

    let store = Store::spawn(&engine);
    let state = store.handle().onboard(answers).await?;
    store.shutdown().await;

    print!("{}", render_dashboard(&Dashboard::from_state(&state)));
    Ok(())
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("╭─────────────────────────────────────────╮\n");
    out.push_str("│           💰 FiFi Dashboard             │\n");
    out.push_str("╰─────────────────────────────────────────╯\n");
    out.push('\n');

    let icon = match dashboard.greeting.tone {
        Tone::Positive => "🎉",
        Tone::Neutral => "💡",
        Tone::Warning => "⚠️ ",
    };
    out.push_str(&format!("  Hi {}!\n", dashboard.name));
    out.push_str(&format!("  {} {}\n", icon, dashboard.greeting.message));
    out.push('\n');

    out.push_str(&format!(
        "  Budget:          {}\n",
        money(dashboard.monthly_budget)
    ));
    out.push_str(&format!(
        "  Spent:           {}\n",
        money(dashboard.spent_this_month)
    ));
    out.push_str(&format!(
        "  Remaining:       {}\n",
        money(dashboard.remaining)
    ));
    out.push('\n');

    out.push_str("  📊 Spending by category:\n");
    for category in SpendingCategory::ALL {
        let spending = dashboard.spending.category(category);
        let marker = match spending.status {
            BudgetStatus::Safe => "✓",
            BudgetStatus::Warning => "!",
            BudgetStatus::Danger => "✗",
        };
        out.push_str(&format!(
            "     {} {:<14} {:>6} / {:<6}\n",
            marker,
            category.as_str(),
            money(spending.spent),
            money(spending.budget)
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "  🛟 Emergency fund  {} {:.0}%\n",
        progress_bar(dashboard.emergency_fund_percent, 20),
        dashboard.emergency_fund_percent
    ));
    out.push_str(&format!(
        "     {} of {}\n",
        money(dashboard.emergency_fund_current),
        money(dashboard.emergency_fund_target)
    ));
    if dashboard.investing_unlocked {
        out.push_str("  📈 Investing:     unlocked\n");
    } else {
        out.push_str("  🔒 Investing:     locked until the emergency fund is complete\n");
    }
    out.push('\n');

    out.push_str(&format!(
        "  Goals:           {} ({} completed)\n",
        dashboard.goals, dashboard.goals_completed
    ));
    out.push_str(&format!(
        "  Streak:          {} weeks (level {})\n",
        dashboard.streak, dashboard.level
    ));
    if dashboard.unread_notifications > 0 {
        out.push_str(&format!(
            "  🔔 {} unread notifications\n",
            dashboard.unread_notifications
        ));
    }
    if dashboard.subscriptions.suspicious > 0 {
        out.push_str(&format!(
            "  ⚠️  {} suspicious subscriptions\n",
            dashboard.subscriptions.suspicious
        ));
    }
    out.push('\n');
    out
}
