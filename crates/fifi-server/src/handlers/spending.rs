//! Spending handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use fifi_core::models::SpendingState;
use fifi_core::store::SpendingPatch;

/// GET /api/spending - This month's spending ledger
pub async fn get_spending(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SpendingState>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(snapshot.spending.clone()))
}

/// PATCH /api/spending - Merge totals and per-category values
pub async fn update_spending(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<SpendingPatch>,
) -> Result<Json<SpendingState>, AppError> {
    state.onboarded()?;

    let amounts = patch.current_month.into_iter().chain(
        patch
            .categories
            .values()
            .flat_map(|c| c.spent.into_iter().chain(c.budget)),
    );
    for amount in amounts {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::bad_request(
                "Spending amounts must be non-negative numbers",
            ));
        }
    }

    let snapshot = state.store.update_spending(patch).await?;
    Ok(Json(snapshot.spending.clone()))
}
