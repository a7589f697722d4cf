//! Smoothed follow camera with a pinned orientation.

use bevy::prelude::*;

use crate::bevy::components::{FollowCamera, PlayerMotion};

/// Smooths the camera toward the player plus its offset.
///
/// The orientation captured on the first follow tick is re-applied every
/// tick, overriding any external change: fixed camera angle, moving
/// position. Without a player or a follow camera the system does nothing.
pub fn follow_player(
    time: Res<Time>,
    players: Query<&Transform, (With<PlayerMotion>, Without<FollowCamera>)>,
    mut cameras: Query<(&mut Transform, &mut FollowCamera), Without<PlayerMotion>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let dt = time.delta_secs();
    for (mut transform, mut camera) in cameras.iter_mut() {
        let fixed = *camera.fixed_rotation.get_or_insert(transform.rotation);
        let desired = player.translation + camera.offset;
        let t = (camera.follow_speed * dt).clamp(0.0, 1.0);
        transform.translation = transform.translation.lerp(desired, t);
        transform.rotation = fixed;
    }
}
