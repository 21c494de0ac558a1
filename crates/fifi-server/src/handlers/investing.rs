//! Investing handlers (behind the emergency fund gate)

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use fifi_core::gate::is_investing_unlocked;
use fifi_core::investing::{
    projected_growth, InvestingView, EXAMPLE_ANNUAL_RETURN, EXAMPLE_MONTHLY, EXAMPLE_YEARS,
};

/// Longest projection horizon accepted
const MAX_YEARS: u32 = 80;

/// GET /api/investing - Locked progress or the unlocked ETF catalog
pub async fn get_investing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvestingView>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(InvestingView::for_profile(&snapshot.user)))
}

#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub monthly: Option<f64>,
    pub years: Option<u32>,
    /// Annual return in percent
    pub rate: Option<f64>,
}

#[derive(Serialize)]
pub struct ProjectionResponse {
    pub monthly: f64,
    pub years: u32,
    pub annual_return: f64,
    pub contributed: f64,
    pub projected_value: f64,
}

/// GET /api/investing/projection - Future value of monthly contributions
pub async fn get_projection(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectionQuery>,
) -> Result<Json<ProjectionResponse>, AppError> {
    let snapshot = state.onboarded()?;
    if !is_investing_unlocked(&snapshot.user) {
        return Err(AppError::conflict(
            "Investing is locked until the emergency fund is complete",
        ));
    }

    let monthly = query.monthly.unwrap_or(EXAMPLE_MONTHLY);
    let years = query.years.unwrap_or(EXAMPLE_YEARS);
    let rate = query.rate.unwrap_or(EXAMPLE_ANNUAL_RETURN);

    if !monthly.is_finite() || monthly < 0.0 {
        return Err(AppError::bad_request("monthly must be a non-negative number"));
    }
    if years == 0 || years > MAX_YEARS {
        return Err(AppError::bad_request("years must be between 1 and 80"));
    }
    if !rate.is_finite() || rate <= -100.0 {
        return Err(AppError::bad_request("rate must be greater than -100"));
    }

    Ok(Json(ProjectionResponse {
        monthly,
        years,
        annual_return: rate,
        contributed: monthly * f64::from(years) * 12.0,
        projected_value: projected_growth(monthly, years, rate),
    }))
}
