// src/voice/session.rs
//! The voice session state machine.
//!
//! States are mutually exclusive; transitions are driven by button presses
//! and capability completion events, and emit the actions the controller
//! must perform. Events that do not apply to the current state are ignored.

/// Shown in place of a reply when the chat request fails. The transport
/// detail is logged, never displayed, and the error is not spoken.
pub const GENERIC_FAILURE_TEXT: &str = "काहीतरी चूक झाली.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
    Processing,
    Speaking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    StartPressed,
    StopPressed,
    CaptureResult(String),
    CaptureFailed(String),
    CaptureEnded,
    ReplyReceived(String),
    RequestFailed(String),
    PlaybackEnded,
    PlaybackFailed(String),
}

/// Side effects a transition asks the controller to perform, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BeginCapture,
    CancelCapture,
    Relay(String),
    CancelPlayback,
    Speak(String),
}

/// One voice conversation session plus its displayable output.
#[derive(Debug, Default)]
pub struct VoiceSession {
    state: VoiceState,
    transcript: Option<String>,
    reply: Option<String>,
    error: Option<String>,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Last captured user transcript, if any.
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    /// Last assistant reply, if any.
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Displayed error text, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Applies one event and returns the actions to perform, in order.
    pub fn handle(&mut self, event: VoiceEvent) -> Vec<Action> {
        match (self.state, event) {
            // Starting while a capture or playback is active is a no-op:
            // only one capture session at a time.
            (VoiceState::Idle, VoiceEvent::StartPressed) => {
                self.transcript = None;
                self.reply = None;
                self.error = None;
                self.state = VoiceState::Listening;
                vec![Action::BeginCapture]
            }

            (VoiceState::Listening, VoiceEvent::StopPressed) => {
                self.state = VoiceState::Idle;
                vec![Action::CancelCapture]
            }
            (VoiceState::Listening, VoiceEvent::CaptureResult(transcript)) => {
                self.transcript = Some(transcript.clone());
                self.state = VoiceState::Processing;
                vec![Action::Relay(transcript)]
            }
            (VoiceState::Listening, VoiceEvent::CaptureFailed(reason)) => {
                // Logged only; capture errors are not surfaced to the user.
                tracing::warn!(%reason, "speech capture failed");
                self.state = VoiceState::Idle;
                Vec::new()
            }
            (VoiceState::Listening, VoiceEvent::CaptureEnded) => {
                self.state = VoiceState::Idle;
                Vec::new()
            }

            (VoiceState::Processing, VoiceEvent::ReplyReceived(reply)) => {
                if reply.is_empty() {
                    self.state = VoiceState::Idle;
                    return Vec::new();
                }
                self.reply = Some(reply.clone());
                self.state = VoiceState::Speaking;
                // A new playback always cancels any in-flight one first.
                vec![Action::CancelPlayback, Action::Speak(reply)]
            }
            (VoiceState::Processing, VoiceEvent::RequestFailed(reason)) => {
                tracing::warn!(%reason, "chat request failed");
                self.error = Some(GENERIC_FAILURE_TEXT.to_string());
                self.state = VoiceState::Idle;
                Vec::new()
            }

            (VoiceState::Speaking, VoiceEvent::StopPressed) => {
                self.state = VoiceState::Idle;
                vec![Action::CancelPlayback]
            }
            (VoiceState::Speaking, VoiceEvent::PlaybackEnded) => {
                self.state = VoiceState::Idle;
                Vec::new()
            }
            (VoiceState::Speaking, VoiceEvent::PlaybackFailed(reason)) => {
                tracing::warn!(%reason, "speech playback failed");
                self.state = VoiceState::Idle;
                Vec::new()
            }

            // Everything else (a second StartPressed while listening, stale
            // capability events after a stop, ...) is ignored.
            _ => Vec::new(),
        }
    }
}
