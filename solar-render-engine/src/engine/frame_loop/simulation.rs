use bevy::math::Vec3;
use constants::orbit::MAX_FRAME_DELTA_SECS;

use super::scheduler::FrameTick;
use crate::engine::camera::idle_drift::CameraRig;
use crate::engine::materials::MaterialUniformSet;
use crate::engine::orbit::{Orbit, step_units};
use crate::engine::scene::body_config::SolarSystemConfig;

/// Per-body frame state.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub orbit: Orbit,
    pub surface: Option<MaterialUniformSet>,
}

/// All mutable per-frame state of a mounted scene, exclusively owned.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<BodyState>,
    star_surface: Option<MaterialUniformSet>,
    camera_rig: CameraRig,
    camera_position: Vec3,
    elapsed_secs: f64,
    frames: u64,
    live: bool,
}

impl SolarSystem {
    pub fn new(config: &SolarSystemConfig, camera_position: Vec3) -> Self {
        let bodies = config
            .bodies()
            .iter()
            .map(|body| BodyState {
                orbit: Orbit::new(body.orbit_params(), body.initial_angle()),
                surface: MaterialUniformSet::new(body.material_kind()),
            })
            .collect();

        Self {
            bodies,
            star_surface: MaterialUniformSet::new(config.star().material_kind()),
            camera_rig: CameraRig::new(),
            camera_position,
            elapsed_secs: 0.0,
            frames: 0,
            live: true,
        }
    }

    /// One frame in fixed order: orbits, camera, material clocks.
    pub fn step(&mut self, tick: FrameTick) {
        let delta = if tick.delta_secs.is_finite() {
            tick.delta_secs.clamp(0.0, MAX_FRAME_DELTA_SECS)
        } else {
            0.0
        };
        self.elapsed_secs += f64::from(delta);

        let dt = step_units(delta);
        for body in &mut self.bodies {
            body.orbit.advance(dt);
        }

        if let Some(position) = self.camera_rig.update(self.camera_position, self.elapsed_secs) {
            self.camera_position = position;
        }

        let surfaces = self
            .bodies
            .iter_mut()
            .filter_map(|body| body.surface.as_mut())
            .chain(self.star_surface.as_mut());
        for surface in surfaces {
            surface.advance(delta);
        }

        self.frames += 1;
    }

    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    pub fn star_surface(&self) -> Option<&MaterialUniformSet> {
        self.star_surface.as_ref()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera_rig
    }

    /// Seconds since mount, accumulated in `f64`.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Mark torn down; frame callbacks that still reach this state become
    /// no-ops.
    pub fn retire(&mut self) {
        self.live = false;
    }
}

/// The frame callback registered at mount.
pub fn step_frame(system: &mut SolarSystem, tick: FrameTick) {
    if system.is_live() {
        system.step(tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::materials::MaterialKind;
    use crate::engine::scene::catalogue;
    use constants::render_settings::INITIAL_CAMERA_POSITION;

    fn tick(delta_secs: f32) -> FrameTick {
        FrameTick { delta_secs }
    }

    fn system() -> SolarSystem {
        SolarSystem::new(&catalogue::builtin().unwrap(), INITIAL_CAMERA_POSITION)
    }

    #[test]
    fn test_initial_state_matches_config() {
        let config = catalogue::builtin().unwrap();
        let system = SolarSystem::new(&config, INITIAL_CAMERA_POSITION);
        for (body, config) in system.bodies().iter().zip(config.bodies()) {
            assert_eq!(body.orbit.state().angle, config.initial_angle());
            assert_eq!(body.surface.is_some(), config.material_kind().is_procedural());
        }
        assert_eq!(system.star_surface().unwrap().kind(), MaterialKind::Sun);
    }

    #[test]
    fn test_first_frame_leaves_camera_at_baseline() {
        let mut system = system();
        system.step(tick(1.0 / 60.0));
        assert_eq!(system.camera_position(), INITIAL_CAMERA_POSITION);
        assert_eq!(system.camera_rig().baseline(), Some(INITIAL_CAMERA_POSITION));

        for _ in 0..120 {
            system.step(tick(1.0 / 60.0));
        }
        assert_ne!(system.camera_position(), INITIAL_CAMERA_POSITION);
        assert!(system.camera_position().distance(INITIAL_CAMERA_POSITION) < 2.0);
    }

    #[test]
    fn test_material_clocks_follow_frame_delta() {
        let mut system = system();
        for _ in 0..30 {
            system.step(tick(0.02));
        }
        let star_time = system.star_surface().unwrap().elapsed_time();
        assert!((star_time - 0.6).abs() < 1e-4);
        for body in system.bodies() {
            if let Some(surface) = body.surface {
                assert_eq!(surface.elapsed_time(), star_time);
            }
        }
    }

    #[test]
    fn test_stalls_are_clamped() {
        let mut system = system();
        let before = system.bodies()[0].orbit.state().angle;
        system.step(tick(30.0));
        let advanced = system.bodies()[0].orbit.state().angle - before;
        let limit = 1.2 * MAX_FRAME_DELTA_SECS * 60.0 * 0.01;
        assert!((advanced - limit).abs() < 1e-5);
        assert_eq!(system.elapsed_secs(), f64::from(MAX_FRAME_DELTA_SECS));
    }

    #[test]
    fn test_retired_state_ignores_frames() {
        let mut system = system();
        step_frame(&mut system, tick(0.1));
        assert_eq!(system.frames(), 1);

        system.retire();
        step_frame(&mut system, tick(0.1));
        assert_eq!(system.frames(), 1);
    }
}
