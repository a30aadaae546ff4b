// src/voice/transport.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{ChatTransport, TransportError};

/// `ChatTransport` over `POST /api/chat`, for native frontends.
pub struct HttpChatTransport {
    client: Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Deserialize)]
struct ChatReplyBody {
    reply: Option<String>,
    error: Option<String>,
}

impl ChatReplyBody {
    // The endpoint contract: exactly one of reply/error per response.
    fn into_reply(self) -> Result<String, TransportError> {
        match (self.reply, self.error) {
            (Some(reply), _) => Ok(reply),
            (None, Some(error)) => Err(TransportError::Api(error)),
            (None, None) => Err(TransportError::MissingReply),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let body: ChatReplyBody = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "message": message }))
            .send()
            .await?
            .json()
            .await?;
        body.into_reply()
    }
}
