//! Advisor chat handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use fifi_core::advisor::{Advice, QUICK_QUESTIONS};
use fifi_core::models::ConversationMessage;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

/// POST /api/advisor/ask - Ask the advisor a question
pub async fn ask_advisor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<Advice>, AppError> {
    state.onboarded()?;

    let advice = state
        .conversation
        .lock()
        .await
        .ask(&req.message)
        .ok_or_else(|| AppError::bad_request("Message cannot be empty"))?;

    Ok(Json(advice))
}

/// GET /api/advisor/messages - Chat transcript, oldest first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ConversationMessage>>, AppError> {
    state.onboarded()?;
    let conversation = state.conversation.lock().await;
    Ok(Json(conversation.messages().to_vec()))
}

/// GET /api/advisor/quick-questions - Suggested prompts
pub async fn quick_questions() -> Json<Vec<&'static str>> {
    Json(QUICK_QUESTIONS.to_vec())
}
