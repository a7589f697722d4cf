//! ECS components for the runner controller.

use bevy::prelude::*;

use crate::flourish::YawFlourish;

/// Player motion state: smoothing targets, the canonical rest orientation
/// and the in-flight yaw flourish, if any.
#[derive(Component, Debug, Clone)]
pub struct PlayerMotion {
    /// Lateral smoothing target, kept within `[-x_limit, x_limit]`.
    pub target_x: f32,
    /// Vertical smoothing target, kept within `[min_y, max_y]`.
    pub target_y: f32,
    /// Orientation captured at spawn; restored exactly when a flourish ends.
    pub rest_rotation: Quat,
    /// In-flight flourish. A new steer trigger replaces it wholesale, so a
    /// superseded task never runs again.
    pub flourish: Option<YawFlourish>,
}

impl PlayerMotion {
    /// Initializes motion state from the spawn transform: lateral target at
    /// the spawn x, vertical target at the bottom of the band.
    pub fn new(spawn: &Transform, min_y: f32) -> Self {
        Self {
            target_x: spawn.translation.x,
            target_y: min_y,
            rest_rotation: spawn.rotation,
            flourish: None,
        }
    }
}

/// Follow rig for the camera entity.
///
/// Position is smoothed toward the player plus `offset`. Orientation is
/// pinned: the value captured on the first follow tick is re-applied every
/// tick afterwards, so the camera keeps a fixed angle while its position
/// follows. This is intentional; the rig never tracks the player's rotation.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    /// Desired offset from the player, in world units.
    pub offset: Vec3,
    /// Follow smoothing rate.
    pub follow_speed: f32,
    /// Captured on the first follow tick; `None` until then.
    pub fixed_rotation: Option<Quat>,
}

impl FollowCamera {
    pub fn new(offset: Vec3, follow_speed: f32) -> Self {
        Self {
            offset,
            follow_speed,
            fixed_rotation: None,
        }
    }
}
