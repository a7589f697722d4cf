//! Bevy integration for the runner movement controller.
//!
//! ECS components, resources, messages and systems wiring the control loop
//! into a host app. Hosts add [`RunnerPlugin`] (or [`RunnerHeadlessPlugin`]
//! for logic-only setups) and drive the lifecycle through [`RunnerMode`].

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{RunnerHeadlessPlugin, RunnerMode, RunnerPlugin};
pub use resources::*;
pub use systems::{
    advance_flourish, apply_steering, apply_voice_commands, drain_phrases, follow_player,
    read_steer_input, sample_voice_level, smooth_motion,
};
