//! Built-in content creator catalog and subscription seed files

use std::path::Path;

use crate::error::Result;
use crate::models::{ContentCreator, RiskTolerance, Subscription};

fn creator(
    id: u32,
    name: &str,
    platform: &str,
    followers: &str,
    philosophy: &str,
    approach: RiskTolerance,
    description: &str,
) -> ContentCreator {
    ContentCreator {
        id,
        name: name.to_string(),
        platform: platform.to_string(),
        followers: followers.to_string(),
        philosophy: philosophy.to_string(),
        approach,
        description: description.to_string(),
    }
}

/// Creators a user can choose to follow
pub fn content_creators() -> Vec<ContentCreator> {
    vec![
        creator(
            1,
            "Dave Ramsey",
            "YouTube",
            "5.2M",
            "Debt-free living, emergency fund first, then investing",
            RiskTolerance::Conservative,
            "Focuses on getting out of debt before investing, emphasizes emergency funds and living below your means.",
        ),
        creator(
            2,
            "Graham Stephan",
            "YouTube",
            "4.8M",
            "Real estate investing, side hustles, early retirement",
            RiskTolerance::Moderate,
            "Advocates for real estate investing, multiple income streams, and building wealth through passive income.",
        ),
        creator(
            3,
            "Andrei Jikh",
            "YouTube",
            "2.1M",
            "Crypto, tech stocks, aggressive growth investing",
            RiskTolerance::Aggressive,
            "Focuses on high-growth investments, cryptocurrency, and emerging technologies for maximum returns.",
        ),
        creator(
            4,
            "Tiffany Aliche",
            "Instagram",
            "1.2M",
            "Budgeting, saving, building credit, community wealth",
            RiskTolerance::Conservative,
            "Emphasizes budgeting, saving strategies, building good credit, and community-based financial education.",
        ),
    ]
}

pub fn find_content_creator(id: u32) -> Option<ContentCreator> {
    content_creators().into_iter().find(|c| c.id == id)
}

/// Read a JSON array of subscriptions used to seed a session
pub fn read_subscriptions(path: &Path) -> Result<Vec<Subscription>> {
    let content = std::fs::read_to_string(path)?;
    let subscriptions: Vec<Subscription> = serde_json::from_str(&content)?;
    Ok(subscriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::SubscriptionStatus;
    use std::io::Write;

    #[test]
    fn test_catalog() {
        let creators = content_creators();
        assert_eq!(creators.len(), 4);
        assert_eq!(find_content_creator(3).unwrap().name, "Andrei Jikh");
        assert_eq!(
            find_content_creator(4).unwrap().approach,
            RiskTolerance::Conservative
        );
        assert!(find_content_creator(9).is_none());
    }

    #[test]
    fn test_read_subscriptions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Netflix", "category": "entertainment", "cost": 15.49,
                "status": "active", "next_billing": "2024-06-01"}},
               {{"id": 2, "name": "Gym", "category": "health", "cost": 30.0,
                "status": "free_trial", "next_billing": "2024-06-10"}}]"#
        )
        .unwrap();

        let subs = read_subscriptions(file.path()).unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[1].status, SubscriptionStatus::FreeTrial);
    }

    #[test]
    fn test_read_subscriptions_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_subscriptions(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_subscriptions(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
