//! Profile derivation command

use anyhow::Result;
use fifi_core::models::UserProfile;
use fifi_core::{derive, SurveyAnswers};

use super::money;

pub fn cmd_derive(answers: &SurveyAnswers, json: bool) -> Result<()> {
    let profile = derive(answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render_profile(&profile));
    }
    Ok(())
}

pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("👤 Profile\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    out.push_str(&format!("   Name:            {}\n", profile.name));
    if !profile.email.is_empty() {
        out.push_str(&format!("   Email:           {}\n", profile.email));
    }
    out.push_str(&format!("   Type:            {}\n", profile.user_type));
    out.push('\n');
    out.push_str(&format!(
        "   Income:          {}\n",
        money(profile.monthly_income)
    ));
    out.push_str(&format!(
        "   Expenses:        {}\n",
        money(profile.monthly_expenses)
    ));

    if profile.monthly_budget < 0.0 {
        out.push_str(&format!(
            "   ⚠️  Budget:       {} (spending exceeds income)\n",
            money(profile.monthly_budget)
        ));
    } else {
        out.push_str(&format!(
            "   Budget:          {}\n",
            money(profile.monthly_budget)
        ));
    }

    out.push_str(&format!(
        "   Savings:         {}\n",
        money(profile.current_savings)
    ));
    out.push_str(&format!(
        "   Debt:            {}\n",
        money(profile.debt_amount)
    ));
    out.push_str(&format!(
        "   Emergency fund:  {} of {}\n",
        money(profile.emergency_fund_current),
        money(profile.emergency_fund_target)
    ));

    if !profile.primary_goals.is_empty() {
        let goals: Vec<&str> = profile.primary_goals.iter().map(|g| g.as_str()).collect();
        out.push_str(&format!("   Goals:           {}\n", goals.join(", ")));
    }
    if let Some(experience) = profile.experience {
        out.push_str(&format!("   Experience:      {}\n", experience));
    }
    if let Some(risk) = profile.risk_tolerance {
        out.push_str(&format!("   Risk tolerance:  {}\n", risk));
    }
    out.push('\n');
    out
}
