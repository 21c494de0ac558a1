//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use fifi_core::config::SimulatorConfig;
use fifi_core::models::SubscriptionStatus;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn quiet_config() -> Config {
    Config {
        simulator: SimulatorConfig {
            enabled: false,
            ..SimulatorConfig::default()
        },
        ..Config::default()
    }
}

fn subscription(id: u64, name: &str, cost: f64, status: SubscriptionStatus) -> Subscription {
    Subscription {
        id,
        name: name.to_string(),
        category: "entertainment".to_string(),
        cost,
        status,
        next_billing: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

/// Router plus the store that backs it (kept alive for the test)
fn setup_test_app() -> (Router, Store) {
    let subscriptions = vec![
        subscription(1, "Netflix", 15.49, SubscriptionStatus::Active),
        subscription(2, "Spotify", 10.99, SubscriptionStatus::Active),
        subscription(3, "Gym Trial", 0.0, SubscriptionStatus::FreeTrial),
        subscription(4, "MYSTERY*CHG", 9.99, SubscriptionStatus::Suspicious),
    ];
    let initial = Session::initial().with_subscriptions(subscriptions);
    let store = Store::spawn_with_state(initial, &quiet_config());
    let app = create_router(store.handle(), ServerConfig::default());
    (app, store)
}

async fn setup_onboarded_app() -> (Router, Store) {
    let (app, store) = setup_test_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/onboarding/demo", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    (app, store)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    send_json("POST", uri, body)
}

// ========== Session API Tests ==========

#[tokio::test]
async fn test_gated_endpoints_conflict_before_onboarding() {
    let (app, _store) = setup_test_app();

    for uri in [
        "/api/dashboard",
        "/api/goals",
        "/api/spending",
        "/api/subscriptions",
        "/api/investing",
        "/api/advisor/messages",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT, "{}", uri);
        let json = get_body_json(response).await;
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn test_onboarding_derives_profile() {
    let (app, _store) = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/onboarding",
            serde_json::json!({
                "name": "Jordan",
                "employment": "freelance",
                "monthly_income": "4,000",
                "monthly_expenses": "2500",
                "current_savings": "1000",
                "financial_goals": ["debt_payoff", "investment"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["user"]["user_type"], "freelancer");
    assert_eq!(json["user"]["monthly_budget"], 1500.0);
    assert_eq!(json["user"]["emergency_fund_target"], 10000.0);
    assert_eq!(json["user"]["emergency_fund_current"], 1000.0);
    assert_eq!(json["spending"]["budget"], 1500.0);

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["greeting"]["tone"], "positive");
    assert!(json["greeting"]["message"]
        .as_str()
        .unwrap()
        .contains("freelance income"));
}

#[tokio::test]
async fn test_reset_returns_to_initial_state() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/session/reset", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["user"]["user_type"], "unset");
    assert_eq!(json["subscriptions"].as_array().unwrap().len(), 0);

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_raw_actions() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({"type": "update_streak", "streak": 6}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["user"]["streak"], 6);

    // Unknown action types are accepted and change nothing
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({"type": "buy_yacht", "size": "large"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let after = get_body_json(response).await;
    assert_eq!(after, json);
}

#[tokio::test]
async fn test_raw_actions_gated_before_onboarding() {
    let (app, _store) = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({
                "type": "add_goal",
                "goal": {
                    "id": 0,
                    "name": "Car",
                    "target_amount": 5000.0,
                    "current_amount": 0.0,
                    "priority": "medium",
                    "category": "other",
                    "created_at": "2024-01-01T00:00:00Z"
                }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Unknown types stay a harmless no-op
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({"type": "buy_yacht"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["goals"].as_array().unwrap().len(), 0);
    assert_eq!(json["user"]["user_type"], "unset");
}

#[tokio::test]
async fn test_raw_profile_with_unknown_field_keeps_session() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({"type": "set_user_profile", "profile": {"nickname": "Sam"}}),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            "/api/profile",
            serde_json::json!({"name": null}),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Demo User");
}

#[tokio::test]
async fn test_raw_reset_clears_conversation() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/advisor/ask",
            serde_json::json!({"message": "What is a budget?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/actions",
            serde_json::json!({"type": "set_user_profile", "profile": {}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["user"]["user_type"], "unset");

    let response = app
        .clone()
        .oneshot(post_json("/api/onboarding/demo", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/advisor/messages")).await.unwrap();
    let messages = get_body_json(response).await;
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "advisor");
}

// ========== Goal API Tests ==========

#[tokio::test]
async fn test_goal_lifecycle() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/goals",
            serde_json::json!({
                "name": "Japan trip",
                "target_amount": 4000.0,
                "priority": "high",
                "category": "travel",
                "deadline": "2025-04-01"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let goal = get_body_json(response).await;
    let id = goal["id"].as_u64().unwrap();
    assert_eq!(goal["current_amount"], 0.0);
    assert_eq!(goal["tier"], "started");

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/goals/{}", id),
            serde_json::json!({"current_amount": 3000.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let goal = get_body_json(response).await;
    assert_eq!(goal["name"], "Japan trip");
    assert_eq!(goal["priority"], "high");
    assert_eq!(goal["progress_percent"], 75.0);
    assert_eq!(goal["tier"], "close");

    let response = app.oneshot(get("/api/goals")).await.unwrap();
    let goals = get_body_json(response).await;
    assert_eq!(goals.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_goal_validation_and_missing() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/goals",
            serde_json::json!({"name": "Bad", "target_amount": 0.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(send_json(
            "PATCH",
            "/api/goals/12345",
            serde_json::json!({"name": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Spending API Tests ==========

#[tokio::test]
async fn test_update_spending() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            "/api/spending",
            serde_json::json!({
                "current_month": 120.0,
                "categories": {"food": {"spent": 95.0, "budget": 100.0}}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["current_month"], 120.0);
    assert_eq!(json["remaining"], 1380.0);
    assert_eq!(json["categories"]["food"]["status"], "danger");

    let response = app
        .oneshot(send_json(
            "PATCH",
            "/api/spending",
            serde_json::json!({"current_month": -5.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Profile API Tests ==========

#[tokio::test]
async fn test_emergency_fund_unlocks_investing() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app.clone().oneshot(get("/api/investing")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "locked");

    let response = app
        .clone()
        .oneshot(get("/api/investing/projection"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            "/api/emergency-fund",
            serde_json::json!({"amount": 14000.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/api/investing")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "unlocked");
    assert_eq!(json["etfs"].as_array().unwrap().len(), 4);

    let response = app
        .oneshot(get("/api/investing/projection?monthly=100&years=2&rate=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["projected_value"], 2400.0);
}

#[tokio::test]
async fn test_content_creator_selection() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/content-creators"))
        .await
        .unwrap();
    let creators = get_body_json(response).await;
    assert_eq!(creators.as_array().unwrap().len(), 4);

    let response = app
        .clone()
        .oneshot(send_json(
            "PUT",
            "/api/content-creator",
            serde_json::json!({"id": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["selected_content_creator"]["name"], "Graham Stephan");

    let response = app
        .oneshot(send_json(
            "PUT",
            "/api/content-creator",
            serde_json::json!({"id": 99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_profile_patch_rejected() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .oneshot(send_json("PATCH", "/api/profile", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Notification API Tests ==========

#[tokio::test]
async fn test_notifications() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/notifications",
            serde_json::json!({"kind": "alert", "title": "Food budget", "message": "95% used"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let notification = get_body_json(response).await;
    let id = notification["id"].as_u64().unwrap();
    assert_eq!(notification["read"], false);

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/notifications/{}/read", id),
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get("/api/notifications"))
        .await
        .unwrap();
    let list = get_body_json(response).await;
    assert_eq!(list[0]["read"], true);

    let response = app
        .oneshot(post_json("/api/notifications/999/read", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Subscription API Tests ==========

#[tokio::test]
async fn test_list_subscriptions_with_filter() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/subscriptions?status=active"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["subscriptions"].as_array().unwrap().len(), 2);
    assert_eq!(json["summary"]["active"], 2);
    assert_eq!(json["summary"]["suspicious"], 1);
    let total = json["summary"]["total_monthly_cost"].as_f64().unwrap();
    assert!((total - 26.48).abs() < 1e-9);

    let response = app
        .clone()
        .oneshot(get("/api/subscriptions"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["subscriptions"].as_array().unwrap().len(), 4);

    let response = app
        .oneshot(get("/api/subscriptions?status=cancelled"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Advisor API Tests ==========

#[tokio::test]
async fn test_advisor_chat() {
    let (app, _store) = setup_onboarded_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/advisor/ask",
            serde_json::json!({"message": "What is a credit score?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["matched"]["concept"], "credit_score");
    assert!(json["text"].as_str().unwrap().starts_with("Credit Score 💡"));

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/advisor/ask",
            serde_json::json!({"message": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/advisor/messages")).await.unwrap();
    let messages = get_body_json(response).await;
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["sender"], "advisor");
    assert_eq!(messages[1]["sender"], "user");
}
