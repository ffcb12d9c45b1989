use bevy::math::Vec3;
use constants::camera::{DRIFT_AMPLITUDE_XZ, DRIFT_AMPLITUDE_Y, DRIFT_SPEED, DRIFT_VERTICAL_RATIO};

/// Offset from the baseline after `elapsed` seconds of drift.
///
/// Lateral follows `sin`, depth follows `cos - 1` so the offset is exactly
/// zero at `t = 0`, and vertical runs at a slower frequency. Phases are
/// evaluated in `f64` so the drift stays smooth after days of uptime.
pub fn drift_offset(elapsed: f64) -> Vec3 {
    let phase = elapsed * f64::from(DRIFT_SPEED);
    let vertical = phase * f64::from(DRIFT_VERTICAL_RATIO);
    Vec3::new(
        phase.sin() as f32 * DRIFT_AMPLITUDE_XZ,
        vertical.sin() as f32 * DRIFT_AMPLITUDE_Y,
        (phase.cos() - 1.0) as f32 * DRIFT_AMPLITUDE_XZ,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    baseline: Option<Vec3>,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn baseline(&self) -> Option<Vec3> {
        self.baseline
    }

    /// Per-frame update. The first call captures `current` as the baseline
    /// and leaves the camera alone; later calls return the drifted position.
    /// The camera is always re-aimed at the origin by the caller.
    pub fn update(&mut self, current: Vec3, elapsed: f64) -> Option<Vec3> {
        match self.baseline {
            None => {
                self.baseline = Some(current);
                None
            }
            Some(baseline) => Some(baseline + drift_offset(elapsed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_only_captures() {
        let mut rig = CameraRig::new();
        let start = Vec3::new(0.0, 10.0, 25.0);
        assert_eq!(rig.update(start, 3.0), None);
        assert_eq!(rig.baseline(), Some(start));
    }

    #[test]
    fn test_baseline_is_never_updated() {
        let mut rig = CameraRig::new();
        let start = Vec3::new(0.0, 10.0, 25.0);
        rig.update(start, 0.0);

        let mut camera = start;
        for frame in 1..600 {
            camera = rig.update(camera, f64::from(frame) / 60.0).unwrap();
        }
        assert_eq!(rig.baseline(), Some(start));
    }

    #[test]
    fn test_camera_equals_baseline_at_zero() {
        let mut rig = CameraRig::new();
        let start = Vec3::new(1.0, 2.0, 3.0);
        rig.update(start, 0.0);
        assert_eq!(rig.update(Vec3::ZERO, 0.0), Some(start));
        assert_eq!(drift_offset(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_drift_stays_within_amplitudes() {
        for i in 0..2000 {
            let offset = drift_offset(f64::from(i) * 0.1);
            assert!(offset.x.abs() <= DRIFT_AMPLITUDE_XZ + 1e-6);
            assert!(offset.y.abs() <= DRIFT_AMPLITUDE_Y + 1e-6);
            assert!(offset.z <= 1e-6 && offset.z >= -2.0 * DRIFT_AMPLITUDE_XZ - 1e-6);
        }
    }

    #[test]
    fn test_drift_is_smooth() {
        let frame = 1.0 / 60.0;
        for i in 0..600 {
            let t = f64::from(i) * frame;
            let step = drift_offset(t + frame) - drift_offset(t);
            assert!(step.length() < 0.01);
        }
    }

    #[test]
    fn test_drift_is_smooth_after_days() {
        let frame = 1.0 / 60.0;
        let start = 3.0 * 86_400.0;
        let mut previous = drift_offset(start);
        for i in 1..600 {
            let offset = drift_offset(start + f64::from(i) * frame);
            let step = (offset - previous).length();
            assert!(step > 0.0 && step < 0.01, "{step}");
            previous = offset;
        }
    }
}
