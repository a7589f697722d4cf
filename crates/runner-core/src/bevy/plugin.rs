//! Runner controller plugins.
//!
//! Provides:
//! - `RunnerHeadlessPlugin`: the full control loop with no render-side
//!   entities, usable with `MinimalPlugins` for headless testing
//! - `RunnerPlugin`: `RunnerHeadlessPlugin` plus a `Camera3d` follow rig

use bevy::prelude::*;

use crate::bevy::components::{FollowCamera, PlayerMotion};
use crate::bevy::events::{SteerEvent, VoiceCommandEvent};
use crate::bevy::resources::{
    CameraSettings, MotionSettings, PhraseQueue, VoiceActivity,
};
use crate::bevy::systems;
use crate::motion::TICK_DT;

/// Controller lifecycle state.
///
/// `OnEnter(Running)` spawns the player and captures its rest orientation;
/// `OnExit(Running)` tears everything down again. Both transitions are safe
/// to run repeatedly.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunnerMode {
    #[default]
    Idle,
    Running,
}

// ============================================================================
// Headless Plugin (control loop only, no render-side entities)
// ============================================================================

/// Headless plugin containing the whole control loop.
///
/// Input edges and recognizer deliveries are picked up once per frame in
/// `Update`; the deterministic movement tick runs in `FixedUpdate` at
/// [`TICK_DT`]. A host camera can participate by attaching [`FollowCamera`]
/// to its own camera entity.
pub struct RunnerHeadlessPlugin {
    pub settings: MotionSettings,
    pub camera: CameraSettings,
    /// Queue shared with an external recognizer; `None` creates a fresh one
    /// (reachable later via the [`PhraseQueue`] resource).
    pub phrase_queue: Option<PhraseQueue>,
}

impl Default for RunnerHeadlessPlugin {
    fn default() -> Self {
        Self {
            settings: MotionSettings::default(),
            camera: CameraSettings::default(),
            phrase_queue: None,
        }
    }
}

impl Plugin for RunnerHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<RunnerMode>();

        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(TICK_DT)));

        app.insert_resource(self.settings.clone())
            .insert_resource(self.camera.clone())
            .insert_resource(self.phrase_queue.clone().unwrap_or_default())
            .insert_resource(VoiceActivity::default());

        app.add_message::<SteerEvent>().add_message::<VoiceCommandEvent>();

        // Per-frame pickup of discrete triggers and recognizer deliveries.
        app.add_systems(
            Update,
            (
                systems::read_steer_input,
                systems::drain_phrases,
                systems::sample_voice_level,
            )
                .run_if(in_state(RunnerMode::Running)),
        );

        // Deterministic control tick.
        app.add_systems(
            FixedUpdate,
            (
                systems::apply_steering,
                systems::apply_voice_commands,
                systems::smooth_motion,
                systems::advance_flourish,
                systems::follow_player,
            )
                .chain()
                .run_if(in_state(RunnerMode::Running)),
        );

        app.add_systems(OnEnter(RunnerMode::Running), setup_player);
        app.add_systems(OnExit(RunnerMode::Running), cleanup);
    }
}

// ============================================================================
// Full Plugin (headless + camera rig)
// ============================================================================

/// Full plugin: the headless control loop plus a `Camera3d` follow rig
/// spawned when the controller activates.
#[derive(Default)]
pub struct RunnerPlugin {
    pub settings: MotionSettings,
    pub camera: CameraSettings,
    pub phrase_queue: Option<PhraseQueue>,
}

impl Plugin for RunnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RunnerHeadlessPlugin {
            settings: self.settings.clone(),
            camera: self.camera.clone(),
            phrase_queue: self.phrase_queue.clone(),
        });

        app.add_systems(OnEnter(RunnerMode::Running), setup_camera);
    }
}

/// Spawns the player at the configured spawn point.
///
/// The rest orientation is captured here; flourishes restore it exactly.
fn setup_player(mut commands: Commands, settings: Res<MotionSettings>) {
    let transform = Transform::from_translation(Vec3::from_array(settings.spawn_position));
    tracing::info!("[runner] player spawned at {:?}", settings.spawn_position);
    commands.spawn((transform, PlayerMotion::new(&transform, settings.min_y)));
}

/// Spawns or reconfigures the follow camera.
///
/// An existing rig is reconfigured in place rather than respawned.
fn setup_camera(
    mut commands: Commands,
    camera: Res<CameraSettings>,
    mut existing: Query<&mut FollowCamera>,
) {
    let offset = Vec3::from_array(camera.offset);
    if let Ok(mut rig) = existing.single_mut() {
        rig.offset = offset;
        rig.follow_speed = camera.follow_speed;
        tracing::info!("[runner] follow camera reconfigured");
    } else {
        commands.spawn((
            Camera3d::default(),
            FollowCamera::new(offset, camera.follow_speed),
        ));
        tracing::info!("[runner] follow camera spawned");
    }
}

/// Tears the controller down: despawns the player and flushes pending input.
///
/// Runs unconditionally on deactivation and is safe with nothing spawned.
fn cleanup(
    mut commands: Commands,
    players: Query<Entity, With<PlayerMotion>>,
    queue: Res<PhraseQueue>,
    mut activity: ResMut<VoiceActivity>,
) {
    tracing::info!("[runner] controller deactivated");
    for entity in players.iter() {
        commands.entity(entity).despawn();
    }
    queue.clear();
    activity.level = 0.0;
}
