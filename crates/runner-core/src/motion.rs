//! Pure control math for the runner's smoothed motion.
//!
//! Discrete triggers and voice commands retarget the lateral and vertical
//! axes; the per-tick systems then pull the transform toward those targets
//! with clamped lerps. Everything here is plain math so it can be tested
//! without an ECS world.

use serde::{Deserialize, Serialize};

use crate::voice::VoiceCommand;

/// Fixed tick rate of the movement control loop, in seconds.
pub const TICK_DT: f32 = 1.0 / 60.0;

/// Direction of a discrete lateral steer trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    Left,
    Right,
}

/// Clamped linear interpolation: `a + (b - a) * clamp(t, 0, 1)`.
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// New lateral target after a steer trigger.
///
/// A trigger retargets by the full limit relative to the current position,
/// clamped to the track boundary. Repeated triggers in the same direction
/// saturate at the boundary immediately rather than stepping toward it.
pub fn steer_target_x(current_x: f32, direction: SteerDirection, limit: f32) -> f32 {
    match direction {
        SteerDirection::Left => (current_x - limit).max(-limit),
        SteerDirection::Right => (current_x + limit).min(limit),
    }
}

/// New vertical target after a voice command, clamped to `[min_y, max_y]`.
///
/// Commands at a boundary are no-ops.
pub fn step_target_y(target_y: f32, command: VoiceCommand, min_y: f32, max_y: f32, step: f32) -> f32 {
    match command {
        VoiceCommand::Raise => (target_y + step).min(max_y),
        VoiceCommand::Lower => (target_y - step).max(min_y),
    }
}
