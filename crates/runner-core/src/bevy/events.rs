//! Buffered messages connecting input sources to the movement systems.

use bevy::prelude::*;

use crate::motion::SteerDirection;
use crate::voice::VoiceCommand;

/// Message fired when a discrete lateral steer trigger is detected.
#[derive(Message, Debug, Clone, Copy)]
pub struct SteerEvent {
    pub direction: SteerDirection,
}

/// Message fired when a recognized phrase maps to a voice command.
#[derive(Message, Debug, Clone, Copy)]
pub struct VoiceCommandEvent {
    pub command: VoiceCommand,
}
