//! Axum route handlers for the Assistant API.
//!
//! An LLM failure never surfaces as an HTTP error here: the chat handler
//! swaps it for the apology message and the conversation carries on.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::assistant::context::market_context;
use crate::assistant::prompts::{build_system_prompt, APOLOGY_MESSAGE};
use crate::assistant::session::{ChatMessage, ChatSession, SessionPhase};
use crate::errors::AppError;
use crate::llm_client::{self, ALLOWED_MODELS, DEFAULT_MODEL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Omit to start a new session.
    pub session_id: Option<Uuid>,
    pub message: String,
    /// Must be on the allow-list when present; sticks to the session.
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub phase: SessionPhase,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub default: &'static str,
    pub models: Vec<&'static str>,
}

/// GET /api/v1/models
pub async fn handle_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        default: DEFAULT_MODEL,
        models: ALLOWED_MODELS.to_vec(),
    })
}

/// POST /api/v1/chat
///
/// Submits one user message and returns the assistant's reply. Creates the
/// session on first use.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if let Some(model) = &request.model {
        if !llm_client::is_allowed_model(model) {
            return Err(AppError::Validation(format!(
                "unknown model '{model}'; allowed: {}",
                ALLOWED_MODELS.join(", ")
            )));
        }
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);

    // Submit event, under the session lock.
    let model = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .entry(session_id)
            .or_insert_with(|| ChatSession::new(DEFAULT_MODEL));
        if let Some(model) = &request.model {
            session.set_model(model.clone());
        }
        session.submit(&request.message)?;
        session.model().to_string()
    };

    // The system prompt carries the aggregate market summary when a dataset
    // is loaded; the assistant still answers without one.
    let context = match state.dataset_snapshot().await {
        Some(dataset) => market_context(&dataset),
        None => String::new(),
    };
    let system_prompt = build_system_prompt(&context);

    let reply = match state
        .llm
        .chat(&system_prompt, &request.message, &model)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!("Chat completion failed: {e}");
            APOLOGY_MESSAGE.to_string()
        }
    };

    // Response-received event. A clear while the call was in flight drops
    // the late reply; the caller still sees it once.
    let history = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
        session.response_received(reply.clone());
        session.history().to_vec()
    };

    Ok(Json(ChatResponse {
        session_id,
        reply,
        history,
    }))
}

/// GET /api/v1/chat/:session_id/history
pub async fn handle_history(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(HistoryResponse {
        session_id,
        phase: session.phase(),
        model: session.model().to_string(),
        messages: session.history().to_vec(),
    }))
}

/// POST /api/v1/chat/:session_id/clear
pub async fn handle_clear(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    session.clear();
    Ok(StatusCode::NO_CONTENT)
}
