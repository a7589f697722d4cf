//! Voice-Runner Core Library
//!
//! Player movement control for a voice-steered runner: edge-triggered
//! keyboard steering with a timed yaw flourish, voice-command vertical
//! movement, smoothed motion with constant forward advance, and a
//! fixed-angle follow camera, packaged as a Bevy plugin.
//!
//! Speech recognition itself stays on the host side: register
//! [`voice::VOICE_KEYWORDS`] with whatever recognizer is available and push
//! its results into the [`crate::bevy::PhraseQueue`] resource. Microphone level
//! sampling is available behind the `microphone` cargo feature.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod flourish;
#[cfg(feature = "microphone")]
pub mod mic;
pub mod motion;
pub mod voice;

// Bevy integration
pub mod bevy;

pub use flourish::{FlourishStep, YawFlourish};
#[cfg(feature = "microphone")]
pub use mic::{LEVEL_WINDOW, MicCapture, MicError, VoiceLevelTap};
pub use motion::{SteerDirection, TICK_DT, lerp_clamped, steer_target_x, step_target_y};
pub use voice::{RecognizedPhrase, VOICE_KEYWORDS, VoiceCommand};
