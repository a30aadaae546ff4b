use voicebot_backend::voice::session::GENERIC_FAILURE_TEXT;
use voicebot_backend::voice::{
    CaptureError, CaptureOutcome, ChatTransport, PlaybackError, SpeechCapture, SpeechPlayback,
    TransportError, VoiceController, VoiceState,
};

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Shared log of capability calls, for asserting ordering across ports.
type CallLog = Arc<Mutex<Vec<String>>>;

fn log(calls: &CallLog, entry: impl Into<String>) {
    calls.lock().unwrap().push(entry.into());
}

struct FakeCapture {
    calls: CallLog,
    outcome: Result<CaptureOutcome, String>,
}

#[async_trait]
impl SpeechCapture for FakeCapture {
    async fn capture(&mut self) -> Result<CaptureOutcome, CaptureError> {
        log(&self.calls, "capture");
        self.outcome.clone().map_err(CaptureError)
    }

    fn cancel(&mut self) {
        log(&self.calls, "capture.cancel");
    }
}

struct FakePlayback {
    calls: CallLog,
    fail: bool,
}

#[async_trait]
impl SpeechPlayback for FakePlayback {
    async fn speak(&mut self, text: &str) -> Result<(), PlaybackError> {
        log(&self.calls, format!("speak:{text}"));
        if self.fail {
            Err(PlaybackError("synthesis-unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn cancel(&mut self) {
        log(&self.calls, "playback.cancel");
    }
}

struct FakeTransport {
    calls: CallLog,
    reply: Result<String, String>,
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        log(&self.calls, format!("send:{message}"));
        self.reply.clone().map_err(TransportError::Api)
    }
}

fn controller(
    capture: Result<CaptureOutcome, String>,
    reply: Result<String, String>,
    playback_fails: bool,
) -> (
    VoiceController<FakeCapture, FakePlayback, FakeTransport>,
    CallLog,
) {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let ctrl = VoiceController::new(
        FakeCapture {
            calls: calls.clone(),
            outcome: capture,
        },
        FakePlayback {
            calls: calls.clone(),
            fail: playback_fails,
        },
        FakeTransport {
            calls: calls.clone(),
            reply,
        },
    );
    (ctrl, calls)
}

#[tokio::test]
async fn full_turn_captures_relays_and_speaks() {
    let (mut ctrl, calls) = controller(
        Ok(CaptureOutcome::Transcript("नमस्कार".to_string())),
        Ok("नमस्कार! कसा आहेस?".to_string()),
        false,
    );

    ctrl.press_start().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert_eq!(ctrl.session().transcript(), Some("नमस्कार"));
    assert_eq!(ctrl.session().reply(), Some("नमस्कार! कसा आहेस?"));
    assert_eq!(ctrl.session().error(), None);
    // Playback is always cancelled before a new utterance starts.
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "capture",
            "send:नमस्कार",
            "playback.cancel",
            "speak:नमस्कार! कसा आहेस?",
        ]
    );
}

#[tokio::test]
async fn no_speech_returns_to_idle_without_network_call() {
    let (mut ctrl, calls) = controller(
        Ok(CaptureOutcome::NoSpeech),
        Ok("unused".to_string()),
        false,
    );

    ctrl.press_start().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert_eq!(*calls.lock().unwrap(), vec!["capture"]);
}

#[tokio::test]
async fn capture_error_resets_silently() {
    let (mut ctrl, calls) = controller(
        Err("not-allowed".to_string()),
        Ok("unused".to_string()),
        false,
    );

    ctrl.press_start().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert_eq!(ctrl.session().error(), None);
    assert_eq!(*calls.lock().unwrap(), vec!["capture"]);
}

#[tokio::test]
async fn failed_request_shows_error_and_never_speaks() {
    let (mut ctrl, calls) = controller(
        Ok(CaptureOutcome::Transcript("प्रश्न".to_string())),
        Err("Message is required".to_string()),
        false,
    );

    ctrl.press_start().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert_eq!(ctrl.session().error(), Some(GENERIC_FAILURE_TEXT));
    // The error text is displayed, not spoken.
    assert_eq!(*calls.lock().unwrap(), vec!["capture", "send:प्रश्न"]);
}

#[tokio::test]
async fn playback_failure_still_ends_the_turn() {
    let (mut ctrl, _calls) = controller(
        Ok(CaptureOutcome::Transcript("प्रश्न".to_string())),
        Ok("उत्तर".to_string()),
        true,
    );

    ctrl.press_start().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert_eq!(ctrl.session().reply(), Some("उत्तर"));
}

#[tokio::test]
async fn stop_while_idle_does_nothing() {
    let (mut ctrl, calls) = controller(
        Ok(CaptureOutcome::Transcript("unused".to_string())),
        Ok("unused".to_string()),
        false,
    );

    ctrl.press_stop().await;

    assert_eq!(ctrl.state(), VoiceState::Idle);
    assert!(calls.lock().unwrap().is_empty());
}
