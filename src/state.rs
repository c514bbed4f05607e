// src/state.rs
use std::sync::Arc;

use crate::services::ollama::{ChatTransport, OllamaClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub ollama: Arc<dyn ChatTransport>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ollama: Arc::new(OllamaClient::new()),
        }
    }

    /// State backed by a caller-supplied transport (stubs in tests).
    pub fn with_transport(transport: Arc<dyn ChatTransport>) -> Self {
        Self { ollama: transport }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
