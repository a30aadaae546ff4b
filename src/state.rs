// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::llm::{CompletionService, OpenAiClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// `None` when no credential is configured; the chat route then serves
    /// the degraded-mode placeholder instead of calling upstream.
    pub completions: Option<Arc<dyn CompletionService>>,
}

impl AppState {
    pub fn new(completions: Option<Arc<dyn CompletionService>>) -> Self {
        Self { completions }
    }

    pub fn from_config(config: &Config) -> Self {
        let completions = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiClient::new(key.clone(), config.model.clone()))
                as Arc<dyn CompletionService>
        });
        Self::new(completions)
    }
}
