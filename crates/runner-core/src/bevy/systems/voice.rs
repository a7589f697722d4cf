//! Voice phrase draining, command application and level sampling.

use bevy::prelude::*;

use crate::bevy::components::PlayerMotion;
use crate::bevy::events::VoiceCommandEvent;
use crate::bevy::resources::{MotionSettings, PhraseQueue, VoiceActivity, VoiceLevelSource};
use crate::motion::step_target_y;
use crate::voice::VoiceCommand;

/// Drains phrases delivered by the recognizer and dispatches them.
///
/// Unrecognized phrases are dropped silently.
pub fn drain_phrases(queue: Res<PhraseQueue>, mut commands: MessageWriter<VoiceCommandEvent>) {
    for phrase in queue.drain() {
        match VoiceCommand::parse(&phrase.text) {
            Some(command) => {
                tracing::debug!(
                    "[voice] {:?} from {:?} (confidence {:.2})",
                    command,
                    phrase.text,
                    phrase.confidence
                );
                commands.write(VoiceCommandEvent { command });
            }
            None => tracing::debug!("[voice] ignoring phrase {:?}", phrase.text),
        }
    }
}

/// Applies voice commands to the vertical target, clamped to the band.
pub fn apply_voice_commands(
    mut reader: MessageReader<VoiceCommandEvent>,
    settings: Res<MotionSettings>,
    mut players: Query<&mut PlayerMotion>,
) {
    for event in reader.read() {
        for mut motion in players.iter_mut() {
            motion.target_y = step_target_y(
                motion.target_y,
                event.command,
                settings.min_y,
                settings.max_y,
                settings.step_y,
            );
        }
    }
}

/// Copies the capture backend's level into [`VoiceActivity`].
///
/// Skipped when no [`VoiceLevelSource`] is installed (no capture device).
pub fn sample_voice_level(
    source: Option<Res<VoiceLevelSource>>,
    mut activity: ResMut<VoiceActivity>,
) {
    let Some(source) = source else {
        return;
    };
    activity.level = source.level();
}
