use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::auth::CurrentUser;
use crate::chat::replies::reply_for;
use crate::errors::AppError;
use crate::models::envelope::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Accepted for client compatibility; replies do not depend on it.
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistory {
    pub messages: Vec<Value>,
    pub total: usize,
}

/// POST /api/chat
pub async fn handle_chat(
    user: CurrentUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let reply = reply_for(&req.message);
    info!(
        user_id = user.id(),
        has_context = req.context.is_some(),
        "Chat message answered"
    );
    Ok(Json(ApiResponse::ok(ChatReply {
        message: reply,
        timestamp: Utc::now(),
    })))
}

/// GET /api/chat/history
///
/// Messages are not stored, so history is always empty.
pub async fn handle_chat_history(
    _user: CurrentUser,
) -> Result<Json<ApiResponse<ChatHistory>>, AppError> {
    Ok(Json(
        ApiResponse::ok(ChatHistory {
            messages: Vec::new(),
            total: 0,
        })
        .with_message("Chat history feature coming soon"),
    ))
}

/// POST /api/chat/feedback
///
/// Feedback is logged, not stored.
pub async fn handle_chat_feedback(
    user: CurrentUser,
    Json(feedback): Json<Map<String, Value>>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    info!(user_id = user.id(), feedback = %serde_json::Value::Object(feedback), "Chat feedback received");
    Ok(Json(ApiResponse::acknowledged("Feedback submitted successfully")))
}
