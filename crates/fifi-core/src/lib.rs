//! FiFi Core Library
//!
//! The personal finance coaching engine behind the FiFi CLI and server:
//! - Profile deriver turning onboarding answers into a budget and emergency fund target
//! - Reducer-style state store with a single-writer async handle
//! - Background spending simulator
//! - Rule-based advisory responder and chat transcript
//! - Investing feature gate and starter ETF catalog
//! - Dashboard greeting and snapshot
//! - TOML configuration with embedded defaults

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod investing;
pub mod models;
pub mod profile;
pub mod simulator;
pub mod store;

pub use advisor::{respond, Advice, Conversation, Matched};
pub use config::{Config, SimulatorConfig, StoreConfig};
pub use dashboard::{Dashboard, Greeting, Tone};
pub use error::{Error, Result};
pub use gate::{emergency_fund_progress, is_investing_unlocked};
pub use investing::{projected_growth, Etf, InvestingView};
pub use profile::{derive, SurveyAnswers};
pub use simulator::SpendingSimulator;
pub use store::{
    Action, AppState, CategoryPatch, GoalPatch, ProfilePatch, SpendingPatch, Store, StoreHandle,
};
