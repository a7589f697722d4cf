//! Timed yaw flourish: the short cosmetic rotation played on a steer trigger.
//!
//! Modeled as an explicit resumable task advanced once per tick rather than a
//! coroutine. At most one flourish is active per player; starting a new one
//! replaces (drops) the old task so it never mutates the transform again.

use bevy::math::{EulerRot, Quat};

/// Result of advancing a flourish by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlourishStep {
    /// Still in flight; apply this orientation.
    Active(Quat),
    /// Elapsed time reached the duration. The caller snaps the orientation
    /// back to the canonical rest value and drops the task.
    Finished,
}

/// An in-progress timed yaw rotation.
///
/// The target keeps the start orientation's pitch and roll but has its yaw
/// *replaced* by the signed flourish angle. On completion the owner restores
/// the rest orientation captured at activation, not this task's target.
#[derive(Debug, Clone)]
pub struct YawFlourish {
    start: Quat,
    target: Quat,
    elapsed: f32,
    duration: f32,
}

impl YawFlourish {
    /// Starts a flourish from the current orientation.
    ///
    /// `current` may be mid-flourish when one trigger supersedes another; the
    /// blend then starts from wherever the previous task left the transform.
    pub fn begin(current: Quat, yaw_degrees: f32, duration: f32) -> Self {
        let (_, pitch, roll) = current.to_euler(EulerRot::YXZ);
        let target = Quat::from_euler(EulerRot::YXZ, yaw_degrees.to_radians(), pitch, roll);
        Self {
            start: current,
            target,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advances by `dt` and yields the blended orientation.
    ///
    /// Finishes on the tick *after* the elapsed time crosses the duration, so
    /// the final in-flight orientation is the (clamped) target and the rest
    /// snap happens one tick later.
    pub fn advance(&mut self, dt: f32) -> FlourishStep {
        if self.elapsed >= self.duration {
            return FlourishStep::Finished;
        }
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).min(1.0);
        FlourishStep::Active(self.start.slerp(self.target, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_flourish_blends_toward_yaw_target() {
        let mut flourish = YawFlourish::begin(Quat::IDENTITY, 10.0, 0.2);
        let FlourishStep::Active(rotation) = flourish.advance(0.1) else {
            panic!("flourish finished on the first tick");
        };
        let expected = Quat::IDENTITY.slerp(Quat::from_rotation_y(10.0_f32.to_radians()), 0.5);
        assert!(rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_flourish_preserves_pitch_and_roll() {
        let start = Quat::from_euler(EulerRot::YXZ, 0.0, 0.3, -0.1);
        let mut flourish = YawFlourish::begin(start, -10.0, 0.2);
        // Run to the clamped end of the blend.
        let mut last = start;
        while let FlourishStep::Active(rotation) = flourish.advance(0.1) {
            last = rotation;
        }
        let (yaw, pitch, roll) = last.to_euler(EulerRot::YXZ);
        assert!((yaw - (-10.0_f32).to_radians()).abs() < 1e-4);
        assert!((pitch - 0.3).abs() < 1e-4);
        assert!((roll - (-0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_flourish_finishes_after_duration() {
        let mut flourish = YawFlourish::begin(Quat::IDENTITY, 10.0, 0.2);
        let mut ticks = 0;
        while let FlourishStep::Active(_) = flourish.advance(DT) {
            ticks += 1;
            assert!(ticks < 60, "flourish never finished");
        }
        // 0.2s at 60Hz is 12 ticks, plus the terminal tick.
        assert!((12..=14).contains(&ticks));
        // Once finished, it stays finished.
        assert_eq!(flourish.advance(DT), FlourishStep::Finished);
    }

    #[test]
    fn test_large_dt_clamps_blend_factor() {
        let mut flourish = YawFlourish::begin(Quat::IDENTITY, 10.0, 0.2);
        let FlourishStep::Active(rotation) = flourish.advance(1.0) else {
            panic!("first tick should still blend");
        };
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(10.0_f32.to_radians()), 1e-5));
        assert_eq!(flourish.advance(DT), FlourishStep::Finished);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut flourish = YawFlourish::begin(Quat::IDENTITY, 10.0, 0.0);
        assert_eq!(flourish.advance(DT), FlourishStep::Finished);
    }
}
