//! Test utilities for headless integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `RunnerHeadlessPlugin` for testing the control loop
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::components::PlayerMotion;
use crate::bevy::plugin::{RunnerHeadlessPlugin, RunnerMode};
use crate::bevy::resources::{CameraSettings, MotionSettings, PhraseQueue};
use crate::motion::TICK_DT;
use crate::voice::RecognizedPhrase;

/// A headless app wrapper for testing.
///
/// Virtual time is paused so only explicit [`TestApp::step`] calls advance
/// the control tick, keeping every test fully deterministic.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a test app with default tuning.
    pub fn new() -> Self {
        Self::with_settings(MotionSettings::default())
    }

    /// Create a test app with specific tuning.
    pub fn with_settings(settings: MotionSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        // Keyboard state is driven directly by `tap`; no input plugin, so
        // pressed edges survive until we clear them ourselves.
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(RunnerHeadlessPlugin {
            settings,
            camera: CameraSettings::default(),
            phrase_queue: None,
        });
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to initialize all resources and state.
        app.update();
        Self { app }
    }

    /// Enter `Running` and process the OnEnter systems.
    pub fn activate(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<NextState<RunnerMode>>()
            .set(RunnerMode::Running);
        self.app.update();
        self.app.update();
    }

    /// Advance the control loop by exactly `n` fixed ticks.
    ///
    /// Feeds time straight into the fixed-timestep accumulator, bypassing
    /// the paused virtual clock.
    pub fn step(&mut self, n: usize) {
        let dt = std::time::Duration::from_secs_f32(TICK_DT);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Simulate a single edge-triggered key press.
    ///
    /// Runs one frame so the press is observed exactly once, then resets the
    /// key. The resulting message is consumed by the next `step`.
    pub fn tap(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset(key);
    }

    /// Deliver a recognized phrase as the external recognizer would.
    ///
    /// Drained on the next frame's `Update`, applied on the tick after; use
    /// `step(2)` or more to observe the effect.
    pub fn say(&self, text: &str) {
        self.app
            .world()
            .resource::<PhraseQueue>()
            .push(RecognizedPhrase::new(text, 1.0));
    }

    /// Snapshot of the player's transform and motion state.
    pub fn player(&mut self) -> (Transform, PlayerMotion) {
        let mut query = self.app.world_mut().query::<(&Transform, &PlayerMotion)>();
        let (transform, motion) = query
            .single(self.app.world())
            .expect("player not spawned; call activate() first");
        (*transform, motion.clone())
    }
}
