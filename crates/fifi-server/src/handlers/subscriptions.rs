//! Subscription handlers (read-only)

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use fifi_core::models::{
    filter_subscriptions, Subscription, SubscriptionStatus, SubscriptionSummary,
};

/// Query params for listing subscriptions
#[derive(Debug, Deserialize)]
pub struct ListSubscriptionsQuery {
    /// Filter by status: active, free_trial, suspicious (omit or "all" for every one)
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct SubscriptionsResponse {
    pub subscriptions: Vec<Subscription>,
    /// Always computed over the full list
    pub summary: SubscriptionSummary,
}

/// GET /api/subscriptions - List subscriptions, optionally filtered by status
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListSubscriptionsQuery>,
) -> Result<Json<SubscriptionsResponse>, AppError> {
    let snapshot = state.onboarded()?;

    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<SubscriptionStatus>()
                .map_err(|e| AppError::bad_request(&e))?,
        ),
    };

    Ok(Json(SubscriptionsResponse {
        subscriptions: filter_subscriptions(&snapshot.subscriptions, status),
        summary: SubscriptionSummary::from_subscriptions(&snapshot.subscriptions),
    }))
}
