//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use fifi_core::dashboard::Dashboard;

/// GET /api/dashboard - Greeting and financial snapshot
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(Dashboard::from_state(&snapshot)))
}
