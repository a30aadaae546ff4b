// src/services/llm.rs
//
// Chat completion relay. One best-effort upstream call per request: no
// retries, no streaming, no caching.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 300;

// An unresponsive upstream must not pin a request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Persona instruction sent as the system message with every request.
pub const SYSTEM_PROMPT: &str = "तू श्री आहेस, यशूच्या वैयक्तिक मराठी व्हॉइस AI असिस्टंट. तू शांत, आत्मविश्वासी आणि स्पष्ट विचार करणारा आहेस. लहान, सोप्या वाक्यांत बोल.

तुझे फोकस एरिया:
- प्रेरणा आणि मोटिवेशन
- संपत्ती निर्माणाची मानसिकता
- दैनंदिन चांगल्या सवयी
- व्यावहारिक मार्गदर्शन

तुझा स्वभाव:
- एखाद्या विश्वासू मित्राप्रमाणे बोल
- थेट आणि प्रामाणिकपणे उत्तर दे
- chatbot सारखा नको वागू
- लहान, प्रभावी सल्ला दे
- व्यावहारिक उपाय सांग

लक्षात ठेव: तू व्हॉइस असिस्टंट आहेस, म्हणून नैसर्गिक बोलण्याच्या शैलीत उत्तर दे.";

/// Served when no API key is configured (degraded mode, still a 200).
pub const MISSING_KEY_REPLY: &str = "नमस्कार! मी श्री आहे. सध्या OpenAI API key कॉन्फिगर केलेली नाही. कृपया OPENAI_API_KEY environment variable सेट करा.";

/// Served when the upstream answers with no completion text.
pub const NO_ANSWER_REPLY: &str = "मला उत्तर देता आले नाही.";

/// Completion backend behind the chat route. Injected through `AppState` so
/// tests can substitute a stub and count upstream calls.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Produces the assistant reply for one user message.
    async fn complete(&self, message: &str) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, message: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("completion API returned {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("invalid completion response body")?;
        Ok(extract_reply(completion))
    }
}

/// First choice's text verbatim, or the fixed fallback when the upstream
/// returns no completion.
fn extract_reply(completion: ChatCompletionResponse) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_else(|| NO_ANSWER_REPLY.to_string())
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
