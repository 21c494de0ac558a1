//! Investing extras shown once the feature gate opens

use serde::{Deserialize, Serialize};

use crate::gate;
use crate::models::UserProfile;

/// Advice shown while investing is still locked
pub const LOCKED_ADVICE: &str = "Before you start investing, it's crucial to have a safety net. Your emergency fund should cover 3-6 months of expenses. Once you reach this goal, you'll unlock the investing section where we can start building your wealth together!";

/// Illustrative projection: $500/month for 30 years at 7%
pub const EXAMPLE_MONTHLY: f64 = 500.0;
pub const EXAMPLE_YEARS: u32 = 30;
pub const EXAMPLE_ANNUAL_RETURN: f64 = 7.0;

/// A starter ETF from the built-in catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Etf {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub expense_ratio: String,
    pub risk: String,
    pub performance: String,
    pub category: String,
    /// Plain-language explanation in the advisor's voice
    pub explanation: String,
}

#[allow(clippy::too_many_arguments)]
fn etf(
    id: u32,
    symbol: &str,
    name: &str,
    description: &str,
    expense_ratio: &str,
    risk: &str,
    performance: &str,
    category: &str,
    explanation: &str,
) -> Etf {
    Etf {
        id,
        symbol: symbol.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        expense_ratio: expense_ratio.to_string(),
        risk: risk.to_string(),
        performance: performance.to_string(),
        category: category.to_string(),
        explanation: explanation.to_string(),
    }
}

/// The starter ETF catalog
pub fn etf_catalog() -> Vec<Etf> {
    vec![
        etf(
            1,
            "VTI",
            "Vanguard Total Stock Market ETF",
            "Broad exposure to the entire U.S. stock market",
            "0.03%",
            "Low-Medium",
            "+12.5%",
            "Total Market",
            "Think of VTI like buying a tiny piece of every company in America. It's like having a diversified portfolio in one investment. Perfect for beginners who want steady growth without the stress of picking individual stocks.",
        ),
        etf(
            2,
            "VXUS",
            "Vanguard Total International Stock ETF",
            "International stock exposure for global diversification",
            "0.08%",
            "Medium",
            "+8.2%",
            "International",
            "VXUS gives you access to companies outside the U.S. - think Toyota, Samsung, Nestle. It's like having a passport to global growth. Great for diversifying beyond just American companies.",
        ),
        etf(
            3,
            "BND",
            "Vanguard Total Bond Market ETF",
            "U.S. bond market exposure for stability",
            "0.03%",
            "Low",
            "+3.1%",
            "Bonds",
            "BND is like lending money to the government and companies. It's more stable than stocks but grows slower. Think of it as the 'safety net' in your investment portfolio.",
        ),
        etf(
            4,
            "QQQ",
            "Invesco QQQ Trust",
            "Technology-focused growth stocks",
            "0.20%",
            "Medium-High",
            "+18.7%",
            "Technology",
            "QQQ focuses on big tech companies like Apple, Microsoft, and Amazon. It's more exciting (and risky) than total market funds. Great if you believe technology will keep growing fast.",
        ),
    ]
}

pub fn find_etf(symbol: &str) -> Option<Etf> {
    etf_catalog()
        .into_iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// Future value of a fixed monthly contribution, compounded monthly
///
/// A zero annual return degenerates to plain summation.
pub fn projected_growth(monthly: f64, years: u32, annual_return_percent: f64) -> f64 {
    let months = f64::from(years) * 12.0;
    let rate = annual_return_percent / 100.0 / 12.0;
    if rate == 0.0 {
        return monthly * months;
    }
    monthly * (((1.0 + rate).powf(months) - 1.0) / rate)
}

/// What the investing surface shows for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvestingView {
    Locked {
        emergency_fund_current: f64,
        emergency_fund_target: f64,
        percent: f64,
        advice: String,
    },
    Unlocked {
        etfs: Vec<Etf>,
        example_projection: f64,
    },
}

impl InvestingView {
    pub fn for_profile(profile: &UserProfile) -> Self {
        if gate::is_investing_unlocked(profile) {
            Self::Unlocked {
                etfs: etf_catalog(),
                example_projection: projected_growth(
                    EXAMPLE_MONTHLY,
                    EXAMPLE_YEARS,
                    EXAMPLE_ANNUAL_RETURN,
                ),
            }
        } else {
            Self::Locked {
                emergency_fund_current: profile.emergency_fund_current,
                emergency_fund_target: profile.emergency_fund_target,
                percent: gate::emergency_fund_percent(profile),
                advice: LOCKED_ADVICE.to_string(),
            }
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked { .. })
    }
}
