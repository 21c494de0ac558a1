//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `advisor` - Advisor commands (ask, chat)
//! - `config` - Resolved configuration display
//! - `dashboard` - Session dashboard
//! - `profile` - Profile derivation from survey answers
//! - `serve` - Web server command
//! - `simulate` - Spending simulator runs

pub mod advisor;
pub mod config;
pub mod dashboard;
pub mod profile;
pub mod serve;
pub mod simulate;

// Re-export command functions for main.rs
pub use advisor::*;
pub use config::*;
pub use dashboard::*;
pub use profile::*;
pub use serve::*;
pub use simulate::*;

/// Format a dollar amount without cents
pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.0}", -amount)
    } else {
        format!("${:.0}", amount)
    }
}

/// Fixed-width progress bar for a percentage in [0, 100]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        100.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
