// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

/// Everything a handler needs, built once in `main` and shared read-only.
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(completion: impl CompletionClient + 'static) -> Self {
        Self {
            completion: Arc::new(completion),
        }
    }
}
