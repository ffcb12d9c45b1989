//! Circular orbit kinematics for the planets.
//!
//! Orbits are deliberately simple: each body sweeps a circle in the XZ plane
//! at a constant angular rate and spins about its own (tilted) axis by a
//! fixed amount per frame.

use std::f32::consts::TAU;

use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use constants::orbit::{MAX_FRAME_DELTA_SECS, ORBIT_RATE_SCALE, REFERENCE_FRAME_RATE, SPIN_STEP};

/// Convert a frame delta in seconds to orbital step units.
///
/// One step is one frame at the reference frame rate, so at 60 fps a body of
/// unit angular speed advances `ORBIT_RATE_SCALE` radians per frame. Long
/// stalls are clamped so a hidden tab does not fling planets around.
pub fn step_units(delta_secs: f32) -> f32 {
    if !delta_secs.is_finite() {
        return 0.0;
    }
    delta_secs.clamp(0.0, MAX_FRAME_DELTA_SECS) * REFERENCE_FRAME_RATE
}

/// Fixed parameters of one orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub distance: f32,
    pub angular_speed: f32,
    pub axial_tilt: f32,
}

/// Mutable accumulators, seeded from the initial angle at mount. Both are
/// kept in `[0, TAU)` after the first step since only their sine and cosine
/// are read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitState {
    pub angle: f32,
    pub spin: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    params: OrbitParams,
    state: OrbitState,
}

impl Orbit {
    pub fn new(params: OrbitParams, initial_angle: f32) -> Self {
        Self {
            params,
            state: OrbitState {
                angle: initial_angle,
                spin: 0.0,
            },
        }
    }

    /// Advance by `dt` step units. The orbital angle scales with `dt`; spin
    /// always moves by one fixed increment.
    pub fn advance(&mut self, dt: f32) {
        let sweep = self.params.angular_speed * dt * ORBIT_RATE_SCALE;
        self.state.angle = (self.state.angle + sweep).rem_euclid(TAU);
        self.state.spin = (self.state.spin + SPIN_STEP).rem_euclid(TAU);
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    /// Position on the orbit circle, in the plane `y = 0`.
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.state.angle.sin_cos();
        Vec3::new(cos * self.params.distance, 0.0, sin * self.params.distance)
    }

    /// Axial tilt about Z, then spin about the tilted pole.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.params.axial_tilt) * Quat::from_rotation_y(self.state.spin)
    }

    /// Orbit centre transform; scale is left to the body mesh.
    pub fn pivot_transform(&self) -> Transform {
        Transform::from_translation(self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbit(distance: f32, angular_speed: f32, initial_angle: f32) -> Orbit {
        Orbit::new(
            OrbitParams {
                distance,
                angular_speed,
                axial_tilt: 0.0,
            },
            initial_angle,
        )
    }

    #[test]
    fn test_single_step_scenario() {
        let mut body = orbit(10.0, 1.0, 0.0);
        body.advance(1.0);

        let k = ORBIT_RATE_SCALE;
        let expected = Vec3::new(k.cos() * 10.0, 0.0, k.sin() * 10.0);
        assert!(body.position().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_angle_advance_is_additive() {
        for (dt1, dt2) in [(1.0, 1.0), (0.5, 2.5), (3.0, 0.25)] {
            let mut twice = orbit(8.5, 0.7, 2.0);
            twice.advance(dt1);
            twice.advance(dt2);

            let mut once = orbit(8.5, 0.7, 2.0);
            once.advance(dt1 + dt2);

            assert!(turned(once.state().angle, twice.state().angle).abs() < 1e-5);
            assert!(twice.position().abs_diff_eq(once.position(), 1e-4));
        }
    }

    #[test]
    fn test_opposite_initial_angles_are_opposite() {
        let mut a = orbit(11.0, 0.6, 0.3);
        let mut b = orbit(11.0, 0.6, 0.3 + std::f32::consts::PI);
        for _ in 0..120 {
            a.advance(1.0);
            b.advance(1.0);
        }
        assert!(a.position().abs_diff_eq(-b.position(), 1e-3));
    }

    #[test]
    fn test_spin_ignores_frame_delta() {
        let mut slow = orbit(4.0, 1.2, 0.0);
        let mut fast = orbit(4.0, 1.2, 0.0);
        slow.advance(0.1);
        fast.advance(5.0);
        assert_eq!(slow.state().spin, SPIN_STEP);
        assert_eq!(fast.state().spin, SPIN_STEP);
    }

    #[test]
    fn test_orbit_stays_in_plane_at_distance() {
        let mut body = orbit(24.0, -0.25, 0.4);
        for _ in 0..500 {
            body.advance(1.3);
            let p = body.position();
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 24.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_tilt_leans_the_pole() {
        let tilted = Orbit::new(
            OrbitParams {
                distance: 20.0,
                angular_speed: 0.3,
                axial_tilt: 0.47,
            },
            0.0,
        );
        let pole = tilted.rotation() * Vec3::Y;
        assert!((pole.angle_between(Vec3::Y) - 0.47).abs() < 1e-5);
    }

    /// Signed angular distance from `from` to `to`, folded into `(-PI, PI]`.
    fn turned(from: f32, to: f32) -> f32 {
        let d = (to - from).rem_euclid(TAU);
        if d > std::f32::consts::PI { d - TAU } else { d }
    }

    #[test]
    fn test_steps_stay_exact_after_days_of_frames() {
        // Neptune-like orbit, more than 10^7 frames (about two days at 60 fps).
        let mut body = orbit(28.0, 0.22, 5.5);
        for _ in 0..10_500_000 {
            body.advance(1.0);
        }

        let before = body.state();
        assert!((0.0..TAU).contains(&before.angle));
        assert!((0.0..TAU).contains(&before.spin));

        body.advance(1.0);
        let after = body.state();
        let sweep = 0.22 * ORBIT_RATE_SCALE;
        assert!((turned(before.angle, after.angle) - sweep).abs() < 1e-5);
        assert!((turned(before.spin, after.spin) - SPIN_STEP).abs() < 1e-5);
        assert!((body.position().length() - 28.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_speed_wraps_into_range() {
        let mut body = orbit(9.0, -1.0, 0.0);
        body.advance(1.0);
        let angle = body.state().angle;
        assert!((0.0..TAU).contains(&angle));
        assert!((turned(0.0, angle) + ORBIT_RATE_SCALE).abs() < 1e-5);
    }

    #[test]
    fn test_step_units() {
        assert!((step_units(1.0 / 60.0) - 1.0).abs() < 1e-5);
        assert_eq!(step_units(-0.5), 0.0);
        assert_eq!(step_units(f32::NAN), 0.0);
        assert_eq!(step_units(10.0), MAX_FRAME_DELTA_SECS * REFERENCE_FRAME_RATE);
    }
}
