//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fifi_core::models::{AgeRange, Employment, Experience, PrimaryGoal, RiskTolerance};
use fifi_core::SurveyAnswers;

/// FiFi - Personal finance coaching from the terminal
#[derive(Parser)]
#[command(name = "fifi")]
#[command(about = "Personal finance coach: budgets, goals, and advice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/fifi/config/fifi.toml, then built-in)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive a profile from onboarding answers
    Derive {
        #[command(flatten)]
        survey: SurveyArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the advisor a single question
    Ask {
        /// Question text
        question: String,

        /// Output as JSON (includes which rule matched)
        #[arg(long)]
        json: bool,
    },

    /// Chat with the advisor interactively (empty line or "quit" to exit)
    Chat,

    /// Run the spending simulator against an onboarded session
    Simulate {
        #[command(flatten)]
        survey: SurveyArgs,

        /// Number of ticks to run
        #[arg(short, long, default_value = "30")]
        ticks: u32,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the session dashboard for a profile
    Dashboard {
        #[command(flatten)]
        survey: SurveyArgs,
    },

    /// Show the resolved configuration
    Config,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// JSON file with the subscriptions the session starts with
        #[arg(long)]
        subscriptions: Option<PathBuf>,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },
}

/// Onboarding survey answers as flags
///
/// Amounts are taken as text: the deriver treats anything unparsable as zero.
#[derive(Args, Debug, Clone, Default)]
pub struct SurveyArgs {
    /// Use the demo profile (other survey flags are ignored)
    #[arg(long)]
    pub demo: bool,

    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Age range: 18-24, 25-34, 35-44, 45-54, 55+
    #[arg(long)]
    pub age: Option<AgeRange>,

    /// Employment: student, fulltime, parttime, freelance, entrepreneur, unemployed
    #[arg(long)]
    pub employment: Option<Employment>,

    /// Monthly income
    #[arg(long, default_value = "")]
    pub income: String,

    /// Monthly expenses
    #[arg(long, default_value = "")]
    pub expenses: String,

    /// Current savings
    #[arg(long, default_value = "")]
    pub savings: String,

    /// Outstanding debt
    #[arg(long, default_value = "")]
    pub debt: String,

    /// Financial goal (repeatable, at most three are kept)
    #[arg(long = "goal")]
    pub goals: Vec<PrimaryGoal>,

    /// Investing experience: beginner, novice, intermediate, advanced
    #[arg(long)]
    pub experience: Option<Experience>,

    /// Risk tolerance: conservative, moderate, aggressive
    #[arg(long)]
    pub risk: Option<RiskTolerance>,
}

impl SurveyArgs {
    pub fn to_answers(&self) -> SurveyAnswers {
        if self.demo {
            return SurveyAnswers::demo();
        }

        SurveyAnswers {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            employment: self.employment,
            monthly_income: self.income.clone(),
            monthly_expenses: self.expenses.clone(),
            current_savings: self.savings.clone(),
            debt_amount: self.debt.clone(),
            financial_goals: self.goals.clone(),
            experience: self.experience,
            risk_tolerance: self.risk,
        }
    }
}
