// src/voice/mod.rs
//! Voice conversation session: capture speech, relay the transcript to the
//! chat endpoint, speak the reply.
//!
//! The session logic is an explicit state machine (`session`) interpreted by
//! a controller (`controller`) over three injected capability ports: speech
//! capture, the chat transport, and speech playback. The browser page in
//! `public/` is the production capture/playback implementation; `transport`
//! provides a native HTTP client for the chat endpoint.

pub mod controller;
pub mod session;
pub mod transport;

pub use controller::VoiceController;
pub use session::{Action, VoiceEvent, VoiceSession, VoiceState};
pub use transport::HttpChatTransport;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("speech capture failed: {0}")]
pub struct CaptureError(pub String);

#[derive(Debug, Error)]
#[error("speech playback failed: {0}")]
pub struct PlaybackError(pub String);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat endpoint returned an error: {0}")]
    Api(String),
    #[error("chat endpoint returned no reply")]
    MissingReply,
}

/// Outcome of one single-shot capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Speech was recognized and transcribed.
    Transcript(String),
    /// The session ended without producing a result.
    NoSpeech,
}

/// Single-shot speech-to-text capability.
#[async_trait]
pub trait SpeechCapture: Send {
    /// Runs one capture session to completion.
    async fn capture(&mut self) -> Result<CaptureOutcome, CaptureError>;

    /// Aborts a pending capture session.
    fn cancel(&mut self);
}

/// Text-to-speech capability. At most one utterance plays at a time.
#[async_trait]
pub trait SpeechPlayback: Send {
    /// Speaks `text` to completion.
    async fn speak(&mut self, text: &str) -> Result<(), PlaybackError>;

    /// Cancels any queued or playing utterance.
    fn cancel(&mut self);
}

/// Request/response bridge to the chat endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one user message and returns the assistant reply.
    async fn send(&self, message: &str) -> Result<String, TransportError>;
}
