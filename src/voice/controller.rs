// src/voice/controller.rs
//! Interprets session actions against the capability ports.

use std::collections::VecDeque;

use super::session::{Action, VoiceEvent, VoiceSession, VoiceState};
use super::{CaptureOutcome, ChatTransport, SpeechCapture, SpeechPlayback};

/// Drives one voice session over injected capture, transport, and playback
/// handles. Suspends only at the three capability boundaries: capture
/// completion, the chat request, and playback completion.
pub struct VoiceController<C, P, T> {
    session: VoiceSession,
    capture: C,
    playback: P,
    transport: T,
}

impl<C, P, T> VoiceController<C, P, T>
where
    C: SpeechCapture,
    P: SpeechPlayback,
    T: ChatTransport,
{
    pub fn new(capture: C, playback: P, transport: T) -> Self {
        Self {
            session: VoiceSession::new(),
            capture,
            playback,
            transport,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.session.state()
    }

    pub fn session(&self) -> &VoiceSession {
        &self.session
    }

    /// Starts a capture session and runs the turn it opens to completion.
    /// A no-op unless the session is idle.
    pub async fn press_start(&mut self) {
        self.dispatch(VoiceEvent::StartPressed).await;
    }

    /// Stops the active capture or playback session.
    pub async fn press_stop(&mut self) {
        self.dispatch(VoiceEvent::StopPressed).await;
    }

    async fn dispatch(&mut self, event: VoiceEvent) {
        let mut pending: VecDeque<Action> = self.session.handle(event).into();
        while let Some(action) = pending.pop_front() {
            if let Some(follow_up) = self.perform(action).await {
                pending.extend(self.session.handle(follow_up));
            }
        }
    }

    /// Performs one action, returning the completion event it produced.
    async fn perform(&mut self, action: Action) -> Option<VoiceEvent> {
        match action {
            Action::BeginCapture => Some(match self.capture.capture().await {
                Ok(CaptureOutcome::Transcript(text)) => VoiceEvent::CaptureResult(text),
                Ok(CaptureOutcome::NoSpeech) => VoiceEvent::CaptureEnded,
                Err(err) => VoiceEvent::CaptureFailed(err.to_string()),
            }),
            Action::CancelCapture => {
                self.capture.cancel();
                None
            }
            Action::Relay(message) => Some(match self.transport.send(&message).await {
                Ok(reply) => VoiceEvent::ReplyReceived(reply),
                Err(err) => VoiceEvent::RequestFailed(err.to_string()),
            }),
            Action::CancelPlayback => {
                self.playback.cancel();
                None
            }
            Action::Speak(text) => Some(match self.playback.speak(&text).await {
                Ok(()) => VoiceEvent::PlaybackEnded,
                Err(err) => VoiceEvent::PlaybackFailed(err.to_string()),
            }),
        }
    }
}
