//! Scripted knowledge base
//!
//! Every text the advisor can say lives here, verbatim.

use serde::{Deserialize, Serialize};

/// Opening line of every conversation
pub const GREETING: &str = "Hi! I'm FiFi, your personal financial coach. How can I help you today? I can explain financial concepts, help with strategies, or answer any money questions you have! 💰";

/// Suggested prompts offered before the user types anything
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What is a credit score?",
    "How do I start investing?",
    "What's an emergency fund?",
    "How do I create a budget?",
];

pub const DEBT_REPLY: &str = "Debt can feel overwhelming, but you're not alone! 💪\n\nHere's a simple strategy:\n1. List all your debts from smallest to largest\n2. Pay minimum on all, extra on the smallest\n3. When smallest is paid off, move to the next\n4. This creates momentum and keeps you motivated!\n\nWould you like me to explain the debt snowball method in detail?";

pub const SAVING_REPLY: &str = "Great question about saving! 🎯\n\nStart with the 1% rule: save just 1% of your income this month, then increase by 1% each month. Before you know it, you'll be saving 12%!\n\nAlso try:\n• Save your change (round up purchases)\n• Use the 52-week challenge\n• Automate transfers to savings\n\nWhat's your biggest saving challenge right now?";

pub const INVESTING_REPLY: &str = "Investing can seem scary, but it's actually simpler than you think! 📈\n\nStart with these steps:\n1. Build your emergency fund first\n2. Start with index funds (like VTI or VOO)\n3. Invest regularly (even $50/month helps)\n4. Don't try to time the market\n\nRemember: The best time to start investing was yesterday. The second best time is today!\n\nWant me to explain index funds?";

pub const DEFAULT_REPLY: &str = "That's a great question! 🤔\n\nI'm here to help you understand any financial concept. You can ask me about:\n• Credit scores and building credit\n• Creating and sticking to budgets\n• Starting to invest\n• Managing debt\n• Building emergency funds\n• And much more!\n\nWhat specific area would you like to learn more about?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptId {
    CreditScore,
    Investing,
    EmergencyFund,
    Budget,
}

/// A financial concept the advisor can explain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub id: ConceptId,
    /// Lowercase phrase that triggers this concept
    pub key: &'static str,
    pub title: &'static str,
    pub explanation: &'static str,
    pub key_points: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Concept {
    /// Full explanation as shown in chat
    pub fn render(&self) -> String {
        let points: Vec<String> = self.key_points.iter().map(|p| format!("• {}", p)).collect();
        let tips: Vec<String> = self.tips.iter().map(|t| format!("✨ {}", t)).collect();

        format!(
            "{} 💡\n\n{}\n\nKey Points:\n{}\n\nPro Tips:\n{}",
            self.title,
            self.explanation,
            points.join("\n"),
            tips.join("\n")
        )
    }
}

/// Concepts in match priority order
pub const CONCEPTS: [Concept; 4] = [
    Concept {
        id: ConceptId::CreditScore,
        key: "credit score",
        title: "Credit Score",
        explanation: "A credit score is a three-digit number (300-850) that represents your creditworthiness. Think of it as a financial report card that lenders use to decide whether to give you credit and at what interest rate.",
        key_points: &[
            "Excellent: 800-850 (Best rates)",
            "Good: 670-799 (Good rates)",
            "Fair: 580-669 (Higher rates)",
            "Poor: 300-579 (Hard to get credit)",
        ],
        tips: &[
            "Pay bills on time",
            "Keep credit card balances low",
            "Don't close old accounts",
            "Limit new credit applications",
        ],
    },
    Concept {
        id: ConceptId::Investing,
        key: "investing",
        title: "Investing Basics",
        explanation: "Investing is putting your money to work to earn more money over time. It's like planting seeds that grow into trees - your money grows through compound interest and market gains.",
        key_points: &[
            "Start with your emergency fund first",
            "Consider index funds or ETFs for beginners",
            "Diversify your investments",
            "Invest for the long term (5+ years)",
        ],
        tips: &[
            "Start small and increase over time",
            "Don't invest money you need soon",
            "Consider your risk tolerance",
            "Automate your investments",
        ],
    },
    Concept {
        id: ConceptId::EmergencyFund,
        key: "emergency fund",
        title: "Emergency Fund",
        explanation: "An emergency fund is money set aside for unexpected expenses like medical bills, car repairs, or job loss. It's your financial safety net that prevents you from going into debt.",
        key_points: &[
            "Aim for 3-6 months of expenses",
            "Keep it in a high-yield savings account",
            "Only use for true emergencies",
            "Replenish after using it",
        ],
        tips: &[
            "Start with $1,000 goal",
            "Save 20% of your income",
            "Cut unnecessary expenses",
            "Use windfalls (tax returns, bonuses)",
        ],
    },
    Concept {
        id: ConceptId::Budget,
        key: "budget",
        title: "Creating a Budget",
        explanation: "A budget is a plan for how you'll spend your money. It helps you control your spending, save money, and reach your financial goals.",
        key_points: &[
            "Track all income and expenses",
            "Use the 50/30/20 rule",
            "50% for needs (rent, food, bills)",
            "30% for wants (entertainment, shopping)",
            "20% for savings and debt repayment",
        ],
        tips: &[
            "Use apps like FiFi to track spending",
            "Review and adjust monthly",
            "Set realistic goals",
            "Celebrate small wins",
        ],
    },
];

pub fn concept(id: ConceptId) -> &'static Concept {
    match id {
        ConceptId::CreditScore => &CONCEPTS[0],
        ConceptId::Investing => &CONCEPTS[1],
        ConceptId::EmergencyFund => &CONCEPTS[2],
        ConceptId::Budget => &CONCEPTS[3],
    }
}
