use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use crate::{
    error::ChatError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// Relay one chat request to Ollama and reshape the reply.
///
/// Stateless: nothing is kept between calls, and failures never take the
/// relay down. Validation happens before any network call.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let Json(payload) = payload.map_err(|e| ChatError::Validation(e.body_text()))?;

    let messages = payload
        .messages
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ChatError::Validation("Messages array is required".to_string()))?;

    let model = payload
        .model
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ChatError::Validation("Model selection is required".to_string()))?;

    // Messages are forwarded unmodified; stream is pinned to false upstream.
    let content = state.ollama.send_chat(&model, &messages).await?;

    Ok(Json(ChatResponse { response: content }))
}
