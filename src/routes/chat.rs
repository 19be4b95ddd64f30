use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    error::{AppError, RelayError},
    message::{ChatRequest, ChatResponse},
    services::prompt::compose_system_prompt,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();

    // Unreadable bodies share the generic failure path with upstream errors.
    let Json(payload) = payload.map_err(|rejection| {
        error!(%request_id, "Error processing chat request: {}", rejection.body_text());
        AppError::internal(rejection.body_text())
    })?;

    let message = match payload.message() {
        None => return Err(RelayError::ValidationFailed.into()),
        Some(Value::String(text)) => text.as_str(),
        // The upstream only accepts text content; fail the same way it would.
        Some(other) => {
            error!(%request_id, "Error processing chat request: non-text message {}", other);
            return Err(AppError::internal(format!(
                "message must be a string, got {}",
                other
            )));
        }
    };

    let custom_persona = payload.system_prompt();
    let system_prompt = compose_system_prompt(custom_persona.as_deref());
    info!(
        %request_id,
        message_len = message.len(),
        custom_persona = custom_persona.is_some(),
        "forwarding chat message"
    );

    let reply = state
        .completion
        .complete(&system_prompt, message)
        .await
        .map_err(|e| {
            error!(%request_id, "Error processing chat request: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(ChatResponse { reply }))
}
