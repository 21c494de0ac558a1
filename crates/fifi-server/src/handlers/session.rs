//! Session lifecycle handlers: onboarding, reset, raw actions

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::{AppError, AppState};
use fifi_core::advisor::Conversation;
use fifi_core::profile::SurveyAnswers;
use fifi_core::store::{Action, AppState as Session};

/// POST /api/onboarding - Derive a profile from survey answers
pub async fn onboard(
    State(state): State<Arc<AppState>>,
    Json(answers): Json<SurveyAnswers>,
) -> Result<Json<Session>, AppError> {
    let snapshot = state.store.onboard(&answers).await?;
    Ok(Json(Session::clone(&snapshot)))
}

/// POST /api/onboarding/demo - Onboard with the demo answers
pub async fn onboard_demo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Session>, AppError> {
    let snapshot = state.store.onboard(&SurveyAnswers::demo()).await?;
    Ok(Json(Session::clone(&snapshot)))
}

/// POST /api/session/reset - Sign out, clearing the whole session
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Session>, AppError> {
    let snapshot = state.store.reset().await?;
    *state.conversation.lock().await = Conversation::new();
    info!("Session reset");
    Ok(Json(Session::clone(&snapshot)))
}

/// GET /api/state - Full session snapshot
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<Session> {
    Json(Session::clone(&state.store.snapshot()))
}

/// POST /api/actions - Apply a serialized store action
///
/// Unrecognised action types are accepted and change nothing. Before
/// onboarding every other kind except `set_user_profile` is a 409. A
/// `set_user_profile` with an empty profile signs out and clears the chat
/// like `/session/reset`.
pub async fn dispatch_action(
    State(state): State<Arc<AppState>>,
    Json(action): Json<Action>,
) -> Result<Json<Session>, AppError> {
    if !action.allowed_before_onboarding() {
        state.onboarded()?;
    }

    let reset = action.is_reset();
    let snapshot = state.store.dispatch(action).await?;
    if reset {
        *state.conversation.lock().await = Conversation::new();
        info!("Session reset");
    }
    Ok(Json(Session::clone(&snapshot)))
}
