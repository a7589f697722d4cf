//! Voice command table.
//!
//! A host-side speech recognizer registers [`VOICE_KEYWORDS`] and delivers
//! recognized phrases asynchronously; [`VoiceCommand::parse`] is the pure
//! dispatch from phrase to effect. Unknown phrases map to `None` and are
//! ignored by the caller.

use serde::{Deserialize, Serialize};

/// The phrase set to register with the host's keyword recognizer.
pub const VOICE_KEYWORDS: &[&str] = &["up", "down"];

/// Effect bound to a recognized phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceCommand {
    /// Raise the vertical target by one step.
    Raise,
    /// Lower the vertical target by one step.
    Lower,
}

impl VoiceCommand {
    /// Pure phrase dispatch: lowercase, then exact keyword match.
    pub fn parse(phrase: &str) -> Option<Self> {
        match phrase.to_lowercase().as_str() {
            "up" => Some(Self::Raise),
            "down" => Some(Self::Lower),
            _ => None,
        }
    }
}

/// A phrase delivered by the recognizer, with its reported confidence.
///
/// Confidence is carried for logging; every delivered phrase is dispatched
/// regardless of its value.
#[derive(Debug, Clone)]
pub struct RecognizedPhrase {
    pub text: String,
    pub confidence: f32,
}

impl RecognizedPhrase {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}
