//! Profile handlers: profile edits, emergency fund, streak, content creator

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use fifi_core::catalog::{content_creators, find_content_creator};
use fifi_core::models::{ContentCreator, UserProfile};
use fifi_core::store::ProfilePatch;

/// GET /api/profile - Current user profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserProfile>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(snapshot.user.clone()))
}

/// PATCH /api/profile - Merge fields into the profile
///
/// The emergency fund and spending budget are re-derived from the patch, so
/// callers should send `current_savings` and `monthly_budget` along with any
/// other change they want to keep them.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UserProfile>, AppError> {
    state.onboarded()?;
    if patch.is_empty() {
        return Err(AppError::bad_request(
            "Empty profile update (use /api/session/reset to sign out)",
        ));
    }

    let snapshot = state.store.set_user_profile(patch).await?;
    Ok(Json(snapshot.user.clone()))
}

#[derive(Debug, Deserialize)]
pub struct EmergencyFundRequest {
    pub amount: f64,
}

/// PUT /api/emergency-fund - Set the emergency fund balance
pub async fn update_emergency_fund(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmergencyFundRequest>,
) -> Result<Json<UserProfile>, AppError> {
    state.onboarded()?;
    if !req.amount.is_finite() || req.amount < 0.0 {
        return Err(AppError::bad_request("Amount must be a non-negative number"));
    }

    let snapshot = state.store.update_emergency_fund(req.amount).await?;
    Ok(Json(snapshot.user.clone()))
}

#[derive(Debug, Deserialize)]
pub struct StreakRequest {
    pub streak: u32,
}

/// PUT /api/streak - Set the on-budget streak
pub async fn update_streak(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StreakRequest>,
) -> Result<Json<UserProfile>, AppError> {
    state.onboarded()?;
    let snapshot = state.store.update_streak(req.streak).await?;
    Ok(Json(snapshot.user.clone()))
}

/// GET /api/content-creators - Creator catalog
pub async fn list_content_creators() -> Json<Vec<ContentCreator>> {
    Json(content_creators())
}

#[derive(Debug, Deserialize)]
pub struct ContentCreatorRequest {
    /// Catalog id, or null to clear the selection
    pub id: Option<u32>,
}

/// PUT /api/content-creator - Follow a creator (or stop following)
pub async fn set_content_creator(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContentCreatorRequest>,
) -> Result<Json<UserProfile>, AppError> {
    state.onboarded()?;

    let creator = match req.id {
        Some(id) => Some(
            find_content_creator(id)
                .ok_or_else(|| AppError::not_found("Content creator not found"))?,
        ),
        None => None,
    };

    let snapshot = state.store.set_content_creator(creator).await?;
    Ok(Json(snapshot.user.clone()))
}
