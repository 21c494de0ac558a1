//! FiFi Web Server
//!
//! Axum-based REST API over one in-memory coaching session per process.
//!
//! - Every mutation goes through a store transition; handlers never edit state
//! - Endpoints beyond onboarding answer 409 until a profile exists
//! - Restrictive CORS policy and request tracing
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use fifi_core::advisor::Conversation;
use fifi_core::models::Subscription;
use fifi_core::store::{AppState as Session, Store, StoreHandle};
use fifi_core::Config;

mod handlers;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Subscriptions the session starts with
    pub subscriptions: Vec<Subscription>,
}

/// Shared application state
pub struct AppState {
    pub store: StoreHandle,
    /// Advisor chat for this session (not part of the store)
    pub conversation: Mutex<Conversation>,
}

impl AppState {
    /// Current snapshot, or 409 while onboarding is incomplete
    pub fn onboarded(&self) -> Result<Arc<Session>, AppError> {
        let snapshot = self.store.snapshot();
        if snapshot.is_onboarded() {
            Ok(snapshot)
        } else {
            Err(AppError::conflict("Complete onboarding first"))
        }
    }
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(store: StoreHandle, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        conversation: Mutex::new(Conversation::new()),
    });

    let api_routes = Router::new()
        // Session
        .route("/onboarding", post(handlers::onboard))
        .route("/onboarding/demo", post(handlers::onboard_demo))
        .route("/session/reset", post(handlers::reset_session))
        .route("/state", get(handlers::get_state))
        .route("/actions", post(handlers::dispatch_action))
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Profile
        .route("/profile", get(handlers::get_profile).patch(handlers::update_profile))
        .route("/emergency-fund", put(handlers::update_emergency_fund))
        .route("/streak", put(handlers::update_streak))
        .route("/content-creators", get(handlers::list_content_creators))
        .route("/content-creator", put(handlers::set_content_creator))
        // Spending
        .route(
            "/spending",
            get(handlers::get_spending).patch(handlers::update_spending),
        )
        // Goals
        .route("/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route("/goals/:id", patch(handlers::update_goal))
        // Notifications
        .route(
            "/notifications",
            get(handlers::list_notifications).post(handlers::create_notification),
        )
        .route(
            "/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
        // Subscriptions
        .route("/subscriptions", get(handlers::list_subscriptions))
        // Investing
        .route("/investing", get(handlers::get_investing))
        .route("/investing/projection", get(handlers::get_projection))
        // Advisor
        .route("/advisor/ask", post(handlers::ask_advisor))
        .route("/advisor/messages", get(handlers::list_messages))
        .route("/advisor/quick-questions", get(handlers::quick_questions));

    // Build CORS layer
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::OPTIONS,
    ];
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server with a fresh session
///
/// Runs until Ctrl+C, then stops the spending simulator and the store.
pub async fn serve(
    engine: &Config,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let initial = Session::initial().with_subscriptions(config.subscriptions.clone());
    let store = Store::spawn_with_state(initial, engine);

    let app = create_router(store.handle(), config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
