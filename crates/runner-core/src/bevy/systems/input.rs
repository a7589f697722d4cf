//! Keyboard input for lateral steering.

use bevy::prelude::*;

use crate::bevy::events::SteerEvent;
use crate::motion::SteerDirection;

/// Edge-triggered steer input: one [`SteerEvent`] per arrow-key press.
///
/// Hosts without keyboard input (no `ButtonInput` resource) are skipped.
pub fn read_steer_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut steer: MessageWriter<SteerEvent>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::ArrowLeft) {
        steer.write(SteerEvent {
            direction: SteerDirection::Left,
        });
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        steer.write(SteerEvent {
            direction: SteerDirection::Right,
        });
    }
}
