//! Goal handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{AppError, AppState};
use fifi_core::models::{Goal, GoalProgressTier, NewGoal};
use fifi_core::store::GoalPatch;

/// A goal with its computed progress
#[derive(Serialize)]
pub struct GoalResponse {
    #[serde(flatten)]
    pub goal: Goal,
    /// Clamped to [0, 1]
    pub progress: f64,
    pub progress_percent: f64,
    pub tier: GoalProgressTier,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            progress: goal.progress(),
            progress_percent: goal.progress_percent(),
            tier: goal.progress_tier(),
            goal,
        }
    }
}

/// GET /api/goals - List goals in creation order
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GoalResponse>>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(
        snapshot.goals.iter().cloned().map(GoalResponse::from).collect(),
    ))
}

/// POST /api/goals - Create a goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGoal>,
) -> Result<(StatusCode, Json<GoalResponse>), AppError> {
    state.onboarded()?;

    if req.name.trim().is_empty() {
        return Err(AppError::bad_request("Goal name is required"));
    }
    if !req.target_amount.is_finite() || req.target_amount <= 0.0 {
        return Err(AppError::bad_request("Target amount must be positive"));
    }

    let goal = state.store.add_goal(req).await?;
    Ok((StatusCode::CREATED, Json(goal.into())))
}

/// PATCH /api/goals/:id - Update goal fields
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(mut patch): Json<GoalPatch>,
) -> Result<Json<GoalResponse>, AppError> {
    let snapshot = state.onboarded()?;
    if snapshot.goal(id).is_none() {
        return Err(AppError::not_found("Goal not found"));
    }

    if let Some(target) = patch.target_amount {
        if !target.is_finite() || target <= 0.0 {
            return Err(AppError::bad_request("Target amount must be positive"));
        }
    }
    if let Some(current) = patch.current_amount {
        if !current.is_finite() || current < 0.0 {
            return Err(AppError::bad_request("Current amount cannot be negative"));
        }
    }
    if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
        return Err(AppError::bad_request("Goal name cannot be blank"));
    }

    patch.id = id;
    let snapshot = state.store.update_goal(patch).await?;
    let goal = snapshot
        .goal(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Goal not found"))?;
    Ok(Json(goal.into()))
}
