// src/config.rs
use std::env;

/// Default chat completion model, matching the production deployment.
pub const DEFAULT_MODEL: &str = "gpt-4";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration, collected from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// `None` when the key is unset, empty, or the `dummy-key` placeholder;
    /// the chat endpoint then answers in degraded mode instead of failing.
    pub openai_api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok().and_then(normalize_key),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

fn normalize_key(key: String) -> Option<String> {
    let key = key.trim().to_string();
    if key.is_empty() || key == "dummy-key" {
        None
    } else {
        Some(key)
    }
}
