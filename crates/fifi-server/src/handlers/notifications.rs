//! Notification handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{AppError, AppState, SuccessResponse};
use fifi_core::models::{Notification, NotificationPayload};

/// GET /api/notifications - Newest first
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let snapshot = state.onboarded()?;
    Ok(Json(snapshot.notifications.clone()))
}

/// POST /api/notifications - Queue a notification
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotificationPayload>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    state.onboarded()?;
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("Notification title is required"));
    }

    let notification = state.store.add_notification(payload).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// POST /api/notifications/:id/read - Mark a notification as read
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<SuccessResponse>, AppError> {
    let snapshot = state.onboarded()?;
    if snapshot.notification(id).is_none() {
        return Err(AppError::not_found("Notification not found"));
    }

    state.store.mark_notification_read(id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
