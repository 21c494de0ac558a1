//! Advisory responder
//!
//! Maps free-text questions to scripted guidance. Matching is plain substring
//! search over the lowercased input against an ordered rule list: the first
//! rule with a matching keyword wins. "budgeting" hits the budget concept and
//! "unsaved" hits the saving bucket; order is the only tie-breaker.
//!
//! The responder never reads the store. Its output depends on the text alone.

mod conversation;
mod knowledge;

use serde::{Deserialize, Serialize};

pub use conversation::Conversation;
pub use knowledge::{
    concept, Concept, ConceptId, CONCEPTS, DEBT_REPLY, DEFAULT_REPLY, GREETING, INVESTING_REPLY,
    QUICK_QUESTIONS, SAVING_REPLY,
};

/// Keyword buckets tried after the concept table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Debt,
    Saving,
    Investing,
}

impl Intent {
    pub fn reply(&self) -> &'static str {
        match self {
            Self::Debt => DEBT_REPLY,
            Self::Saving => SAVING_REPLY,
            Self::Investing => INVESTING_REPLY,
        }
    }
}

/// Which rule produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matched {
    Concept(ConceptId),
    Intent(Intent),
    Fallback,
}

/// One entry of the ordered rule list
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub matched: Matched,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order
pub const RULES: [Rule; 7] = [
    Rule {
        keywords: &["credit score"],
        matched: Matched::Concept(ConceptId::CreditScore),
    },
    Rule {
        keywords: &["investing"],
        matched: Matched::Concept(ConceptId::Investing),
    },
    Rule {
        keywords: &["emergency fund"],
        matched: Matched::Concept(ConceptId::EmergencyFund),
    },
    Rule {
        keywords: &["budget"],
        matched: Matched::Concept(ConceptId::Budget),
    },
    Rule {
        keywords: &["debt", "credit card"],
        matched: Matched::Intent(Intent::Debt),
    },
    Rule {
        keywords: &["save", "saving"],
        matched: Matched::Intent(Intent::Saving),
    },
    Rule {
        keywords: &["invest", "stock"],
        matched: Matched::Intent(Intent::Investing),
    },
];

/// A reply and the rule that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub matched: Matched,
    pub text: String,
}

/// Find the first matching rule for `input`
pub fn classify(input: &str) -> Matched {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.matched)
        .unwrap_or(Matched::Fallback)
}

/// Answer a free-text question
pub fn respond(input: &str) -> Advice {
    let matched = classify(input);
    let text = match matched {
        Matched::Concept(id) => concept(id).render(),
        Matched::Intent(intent) => intent.reply().to_string(),
        Matched::Fallback => DEFAULT_REPLY.to_string(),
    };
    Advice { matched, text }
}
