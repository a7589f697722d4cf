//! Steering, position smoothing, forward advance and the yaw flourish.

use bevy::prelude::*;

use crate::bevy::components::PlayerMotion;
use crate::bevy::events::SteerEvent;
use crate::bevy::resources::MotionSettings;
use crate::flourish::{FlourishStep, YawFlourish};
use crate::motion::{SteerDirection, lerp_clamped, steer_target_x};

/// Retargets the lateral axis and restarts the flourish on steer triggers.
///
/// Assigning a fresh flourish drops the previous task outright, so a
/// superseded flourish never mutates the transform again. The replacement
/// starts from the current (possibly mid-flourish) orientation.
pub fn apply_steering(
    mut steer: MessageReader<SteerEvent>,
    settings: Res<MotionSettings>,
    mut players: Query<(&Transform, &mut PlayerMotion)>,
) {
    for event in steer.read() {
        for (transform, mut motion) in players.iter_mut() {
            motion.target_x =
                steer_target_x(transform.translation.x, event.direction, settings.x_limit);
            let yaw = match event.direction {
                SteerDirection::Left => -settings.rotation_amount_deg,
                SteerDirection::Right => settings.rotation_amount_deg,
            };
            motion.flourish = Some(YawFlourish::begin(
                transform.rotation,
                yaw,
                settings.rotation_duration,
            ));
            tracing::debug!(
                "[motion] steer {:?}: target_x {}",
                event.direction,
                motion.target_x
            );
        }
    }
}

/// Smooths x/y toward their targets and advances forward.
///
/// Both axes share one smoothing rate. The forward advance is unconditional
/// and unaffected by smoothing.
pub fn smooth_motion(
    time: Res<Time>,
    settings: Res<MotionSettings>,
    mut players: Query<(&mut Transform, &PlayerMotion)>,
) {
    let dt = time.delta_secs();
    for (mut transform, motion) in players.iter_mut() {
        let t = settings.move_speed * dt;
        transform.translation.x = lerp_clamped(transform.translation.x, motion.target_x, t);
        transform.translation.y = lerp_clamped(transform.translation.y, motion.target_y, t);
        transform.translation.z += settings.forward_speed * dt;
    }
}

/// Advances the in-flight flourish.
///
/// On completion the orientation snaps back to the stored rest value exactly
/// (not the flourish's own target) and the task handle is cleared.
pub fn advance_flourish(time: Res<Time>, mut players: Query<(&mut Transform, &mut PlayerMotion)>) {
    let dt = time.delta_secs();
    for (mut transform, mut motion) in players.iter_mut() {
        let Some(flourish) = motion.flourish.as_mut() else {
            continue;
        };
        match flourish.advance(dt) {
            FlourishStep::Active(rotation) => transform.rotation = rotation,
            FlourishStep::Finished => {
                transform.rotation = motion.rest_rotation;
                motion.flourish = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::KeyCode;

    use crate::bevy::resources::MotionSettings;
    use crate::bevy::test_utils::TestApp;

    #[test]
    fn test_steer_left_saturates_target() {
        let mut app = TestApp::new();
        app.activate();

        app.tap(KeyCode::ArrowLeft);
        app.step(1);
        let (_, motion) = app.player();
        assert!((motion.target_x - (-0.6)).abs() < 1e-6);

        // Steering left again from near the boundary stays clamped.
        app.tap(KeyCode::ArrowLeft);
        app.step(1);
        let (_, motion) = app.player();
        assert!(motion.target_x >= -0.6);
    }

    #[test]
    fn test_smoothing_approaches_target_monotonically() {
        let mut app = TestApp::new();
        app.activate();

        app.tap(KeyCode::ArrowRight);
        app.step(1);
        let mut gap = (app.player().0.translation.x - 0.6).abs();
        for _ in 0..120 {
            app.step(1);
            let next_gap = (app.player().0.translation.x - 0.6).abs();
            assert!(next_gap <= gap, "lateral smoothing overshot");
            gap = next_gap;
        }
        assert!(gap < 0.05, "lateral smoothing stalled at gap {gap}");
    }

    #[test]
    fn test_forward_advance_is_linear() {
        let settings = MotionSettings {
            forward_speed: 6.0,
            ..MotionSettings::default()
        };
        let mut app = TestApp::with_settings(settings);
        app.activate();

        app.step(60);
        let z = app.player().0.translation.z;
        // 6 units/s for 60 ticks of 1/60s.
        assert!((z - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_flourish_restores_rest_rotation_exactly() {
        let mut app = TestApp::new();
        app.activate();
        let rest = app.player().1.rest_rotation;

        app.tap(KeyCode::ArrowLeft);
        app.step(2);
        // Mid-flourish the orientation has left rest.
        assert_ne!(app.player().0.rotation, rest);

        // 0.2s at 60Hz plus the terminal tick.
        app.step(20);
        let (transform, motion) = app.player();
        assert_eq!(transform.rotation, rest);
        assert!(motion.flourish.is_none());
    }

    #[test]
    fn test_superseding_flourish_still_settles_at_rest() {
        let mut app = TestApp::new();
        app.activate();
        let rest = app.player().1.rest_rotation;

        app.tap(KeyCode::ArrowLeft);
        app.step(3);
        // Second trigger before the first flourish completes.
        app.tap(KeyCode::ArrowRight);
        app.step(30);

        let (transform, motion) = app.player();
        assert_eq!(transform.rotation, rest, "yaw residue after superseded flourish");
        assert!(motion.flourish.is_none());
        // Right trigger retargeted relative to the slightly-left position.
        assert!(motion.target_x > 0.4 && motion.target_x <= 0.6);
    }
}
