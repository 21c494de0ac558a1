//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fifi_core::config::SimulatorConfig;
use fifi_core::models::{Employment, PrimaryGoal};
use fifi_core::{derive, Config, Dashboard, Store, SurveyAnswers};

use crate::cli::{Cli, Commands};
use crate::commands::{self, money, progress_bar};

fn test_config(probability: f64) -> Config {
    Config {
        simulator: SimulatorConfig {
            enabled: true,
            interval: Duration::from_secs(30),
            probability,
            max_increment: 20,
        },
        ..Config::default()
    }
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_derive_flags() {
    let cli = Cli::try_parse_from([
        "fifi",
        "derive",
        "--name",
        "Sam",
        "--employment",
        "student",
        "--income",
        "1,200",
        "--expenses",
        "900",
        "--goal",
        "savings",
        "--goal",
        "budgeting",
        "--age",
        "18-24",
    ])
    .unwrap();

    match cli.command {
        Commands::Derive { survey, json } => {
            assert!(!json);
            let answers = survey.to_answers();
            assert_eq!(answers.name, "Sam");
            assert_eq!(answers.employment, Some(Employment::Student));
            assert_eq!(
                answers.financial_goals,
                vec![PrimaryGoal::Savings, PrimaryGoal::Budgeting]
            );

            let profile = derive(&answers);
            assert_eq!(profile.monthly_budget, 300.0);
            assert_eq!(profile.emergency_fund_target, 3600.0);
        }
        _ => panic!("expected derive"),
    }
}

#[test]
fn test_parse_demo_ignores_other_flags() {
    let cli = Cli::try_parse_from(["fifi", "dashboard", "--demo", "--income", "1"]).unwrap();
    match cli.command {
        Commands::Dashboard { survey } => {
            let answers = survey.to_answers();
            assert_eq!(answers.monthly_income, SurveyAnswers::demo().monthly_income);
        }
        _ => panic!("expected dashboard"),
    }
}

#[test]
fn test_parse_rejects_unknown_employment() {
    let result = Cli::try_parse_from(["fifi", "derive", "--employment", "astronaut"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from(["fifi", "config", "--config", "/tmp/fifi.toml", "-v"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/fifi.toml")));
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn test_parse_serve_origins() {
    let cli = Cli::try_parse_from([
        "fifi",
        "serve",
        "--port",
        "8080",
        "--allowed-origin",
        "http://localhost:5173",
        "--allowed-origin",
        "http://localhost:3000",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve {
            port,
            host,
            subscriptions,
            allowed_origins,
        } => {
            assert_eq!(port, 8080);
            assert_eq!(host, "127.0.0.1");
            assert!(subscriptions.is_none());
            assert_eq!(allowed_origins.len(), 2);
        }
        _ => panic!("expected serve"),
    }
}

// ========== Formatting Tests ==========

#[test]
fn test_money() {
    assert_eq!(money(1500.0), "$1500");
    assert_eq!(money(-250.4), "-$250");
    assert_eq!(money(0.0), "$0");
}

#[test]
fn test_progress_bar() {
    assert_eq!(progress_bar(0.0, 10), "░░░░░░░░░░");
    assert_eq!(progress_bar(50.0, 10), "█████░░░░░");
    assert_eq!(progress_bar(250.0, 4), "████");
    assert_eq!(progress_bar(f64::INFINITY, 4), "████");
}

// ========== Profile Command Tests ==========

#[test]
fn test_render_profile_flags_overspending() {
    let answers = SurveyAnswers {
        employment: Some(Employment::Parttime),
        monthly_income: "1000".to_string(),
        monthly_expenses: "1400".to_string(),
        ..Default::default()
    };
    let out = commands::render_profile(&derive(&answers));
    assert!(out.contains("Demo User"));
    assert!(out.contains("-$400"));
    assert!(out.contains("spending exceeds income"));
    assert!(out.contains("$5600"));
}

#[test]
fn test_cmd_derive_json() {
    let result = commands::cmd_derive(&SurveyAnswers::demo(), true);
    assert!(result.is_ok());
}

// ========== Advisor Command Tests ==========

#[test]
fn test_cmd_ask_rejects_blank() {
    assert!(commands::cmd_ask("   ", false).is_err());
    assert!(commands::cmd_ask("How do I pay off debt?", false).is_ok());
}

#[test]
fn test_run_chat_transcript() {
    let input = Cursor::new("What is a credit score?\nhelp me save\n\nnever read\n");
    let mut output = Vec::new();

    let asked = commands::run_chat(input, &mut output).unwrap();
    assert_eq!(asked, 2);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Try asking:"));
    assert!(text.contains("Credit Score 💡"));
    assert!(text.contains("Goodbye"));
}

#[test]
fn test_run_chat_quit() {
    let input = Cursor::new("quit\nWhat is a budget?\n");
    let mut output = Vec::new();
    let asked = commands::run_chat(input, &mut output).unwrap();
    assert_eq!(asked, 0);
}

// ========== Simulation Command Tests ==========

#[tokio::test]
async fn test_simulation_is_reproducible() {
    let config = test_config(0.5);
    let answers = SurveyAnswers::demo();

    let a = commands::run_simulation(&config, &answers, 40, Some(11))
        .await
        .unwrap();
    let b = commands::run_simulation(&config, &answers, 40, Some(11))
        .await
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.ticks, 40);
    assert_eq!(a.budget, 1500.0);
    assert!(a.spent >= 0.0);
    assert!(a.spent <= f64::from(a.purchases) * 19.0);
    assert_eq!(a.remaining, a.budget - a.spent);
}

#[tokio::test]
async fn test_simulation_zero_probability_spends_nothing() {
    let config = test_config(0.0);
    let report = commands::run_simulation(&config, &SurveyAnswers::demo(), 25, Some(3))
        .await
        .unwrap();

    assert_eq!(report.purchases, 0);
    assert_eq!(report.spent, 0.0);
    assert_eq!(report.remaining, 1500.0);
}

// ========== Dashboard Command Tests ==========

#[tokio::test]
async fn test_render_dashboard_for_demo() {
    let mut config = test_config(0.0);
    config.simulator.enabled = false;
    let store = Store::spawn(&config);
    let state = store.handle().onboard(&SurveyAnswers::demo()).await.unwrap();
    store.shutdown().await;

    let out = commands::render_dashboard(&Dashboard::from_state(&state));
    assert!(out.contains("FiFi Dashboard"));
    assert!(out.contains("Hi Demo User!"));
    assert!(out.contains("$1500 remaining"));
    assert!(out.contains("$2000 of $14000"));
    assert!(out.contains("locked until the emergency fund is complete"));
    assert!(out.contains("food"));
}

// ========== Config Command Tests ==========

#[test]
fn test_render_config() {
    let config = test_config(0.3);
    let out = commands::render_config(&config, None);
    assert!(out.contains("built-in defaults"));
    assert!(out.contains("interval        30s"));
    assert!(out.contains("probability     0.30"));
    assert!(out.contains("queue capacity  64"));
}

#[test]
fn test_cmd_config_reports_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fifi.toml");
    std::fs::write(&path, "[simulator]\ninterval_secs = 5\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    let out = commands::render_config(&config, Some(path.clone()));
    assert!(out.contains(&path.display().to_string()));
    assert!(commands::cmd_config(&config, Some(&path)).is_ok());
}

// ========== Serve Command Tests ==========

#[tokio::test]
async fn test_cmd_serve_rejects_bad_subscriptions_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subs.json");
    std::fs::write(&path, "not json").unwrap();

    let result = commands::cmd_serve(&test_config(0.0), "127.0.0.1", 0, Some(&path), vec![]).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to load subscriptions"));
}
