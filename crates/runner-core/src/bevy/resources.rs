//! ECS resources: controller tuning and cross-thread handoff queues.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::voice::RecognizedPhrase;

/// Movement tuning surface. Defaults mirror the shipped level tuning.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Constant forward advance rate, units/s. Tuned per level.
    pub forward_speed: f32,
    /// Smoothing rate shared by the lateral and vertical axes.
    pub move_speed: f32,
    /// Track half-width; steer targets live in `[-x_limit, x_limit]`.
    pub x_limit: f32,
    /// Signed yaw applied during a steer flourish, in degrees.
    pub rotation_amount_deg: f32,
    /// Flourish duration, in seconds.
    pub rotation_duration: f32,
    /// Bottom of the vertical band; also the spawn vertical target.
    pub min_y: f32,
    /// Top of the vertical band.
    pub max_y: f32,
    /// Vertical step per voice command.
    pub step_y: f32,
    /// Voice activity threshold. The sampled level is published in
    /// [`VoiceActivity`]; gating against this value is left to the host.
    pub min_voice_threshold: f32,
    /// Player spawn point.
    pub spawn_position: [f32; 3],
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            forward_speed: 0.0,
            move_speed: 2.0,
            x_limit: 0.6,
            rotation_amount_deg: 10.0,
            rotation_duration: 0.2,
            min_y: 0.2,
            max_y: 0.6,
            step_y: 0.2,
            min_voice_threshold: 0.01,
            spawn_position: [0.0, 0.2, 0.0],
        }
    }
}

impl MotionSettings {
    /// Loads settings from a JSON tuning document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Camera rig tuning.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Desired offset from the player.
    pub offset: [f32; 3],
    /// Follow smoothing rate.
    pub follow_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            offset: [0.0, 2.0, -5.0],
            follow_speed: 10.0,
        }
    }
}

/// Latest sampled microphone level (mean absolute amplitude).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct VoiceActivity {
    pub level: f32,
}

/// Source of the current microphone level.
///
/// Wraps whatever capture backend the host runs: `MicCapture` from the
/// `microphone` feature, or anything else that can report a level. When the
/// resource is absent, level sampling is skipped entirely.
#[derive(Resource, Clone)]
pub struct VoiceLevelSource(Arc<dyn Fn() -> f32 + Send + Sync>);

impl VoiceLevelSource {
    pub fn new(level: impl Fn() -> f32 + Send + Sync + 'static) -> Self {
        Self(Arc::new(level))
    }

    pub fn level(&self) -> f32 {
        (self.0)()
    }
}

/// Thread-safe queue of recognized phrases.
///
/// Recognizer callbacks push from any thread; the drain system empties the
/// queue once per frame on the app thread, so ticks never observe a
/// half-applied command.
#[derive(Resource, Clone, Default)]
pub struct PhraseQueue {
    inner: Arc<Mutex<VecDeque<RecognizedPhrase>>>,
}

impl PhraseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a phrase from a recognizer callback (any thread).
    pub fn push(&self, phrase: RecognizedPhrase) {
        self.inner.lock().push_back(phrase);
    }

    /// Drain all pending phrases in delivery order.
    pub fn drain(&self) -> Vec<RecognizedPhrase> {
        self.inner.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Discard pending phrases.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
