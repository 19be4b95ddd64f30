// src/routes/mod.rs
pub mod chat;

use crate::{message::StatusResponse, state::SharedState};
use axum::{
    Json, Router,
    routing::{get, post},
};
use chat::chat_handler;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API is running".to_string(),
        usage: "Send POST requests to /chat endpoint".to_string(),
    })
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
