use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::llm::MISSING_KEY_REPLY,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    // No credential: answer with the fixed placeholder instead of failing.
    let Some(completions) = &state.completions else {
        return Ok(Json(ChatResponse {
            reply: MISSING_KEY_REPLY.to_string(),
        }));
    };

    let reply = completions.complete(message).await?;
    Ok(Json(ChatResponse { reply }))
}
