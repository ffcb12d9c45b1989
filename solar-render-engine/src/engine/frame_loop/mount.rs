use bevy::prelude::*;

use super::scheduler::{FrameHandle, FrameScheduler};
use super::simulation::{SolarSystem, step_frame};
use crate::engine::scene::body_config::SolarSystemConfig;

/// A mounted scene: its frame state plus the registration that drives it.
#[derive(Resource, Debug)]
pub struct MountedScene {
    system: SolarSystem,
    handle: FrameHandle,
}

impl MountedScene {
    /// Create fresh frame state and register the frame callback.
    pub fn mount<F>(config: &SolarSystemConfig, camera_position: Vec3, scheduler: &mut F) -> Self
    where
        F: FrameScheduler<SolarSystem>,
    {
        Self {
            system: SolarSystem::new(config, camera_position),
            handle: scheduler.request_frame(step_frame),
        }
    }

    /// Cancel the registration and retire the state. Consumes the scene so
    /// nothing can drive it afterwards; the retired state is returned only
    /// for inspection.
    pub fn unmount<F>(mut self, scheduler: &mut F) -> SolarSystem
    where
        F: FrameScheduler<SolarSystem>,
    {
        if !scheduler.cancel(self.handle) {
            warn!("Frame callback {:?} was already released", self.handle);
        }
        self.system.retire();
        self.system
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut SolarSystem {
        &mut self.system
    }

    pub fn handle(&self) -> FrameHandle {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::frame_loop::scheduler::ManualClock;
    use crate::engine::scene::catalogue;
    use constants::render_settings::INITIAL_CAMERA_POSITION;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_mount_drives_frames() {
        let config = catalogue::builtin().unwrap();
        let mut clock = ManualClock::new();
        let mut scene = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut clock);

        for _ in 0..10 {
            clock.advance(scene.system_mut(), FRAME);
        }
        assert_eq!(scene.system().frames(), 10);
        assert_eq!(clock.invocations(), 10);
    }

    #[test]
    fn test_no_invocations_after_unmount() {
        let config = catalogue::builtin().unwrap();
        let mut clock = ManualClock::new();
        let mut scene = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut clock);
        clock.advance(scene.system_mut(), FRAME);

        let mut retired = scene.unmount(&mut clock);
        let invocations = clock.invocations();
        assert_eq!(clock.registered(), 0);
        assert!(!retired.is_live());

        for _ in 0..5 {
            clock.advance(&mut retired, FRAME);
        }
        assert_eq!(clock.invocations(), invocations);
        assert_eq!(retired.frames(), 1);
    }

    #[test]
    fn test_remount_starts_from_scratch() {
        let config = catalogue::builtin().unwrap();
        let mut clock = ManualClock::new();

        let mut first = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut clock);
        for _ in 0..50 {
            clock.advance(first.system_mut(), FRAME);
        }
        first.unmount(&mut clock);

        let second = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut clock);
        assert_eq!(second.system().frames(), 0);
        assert_eq!(second.system().camera_rig().baseline(), None);
        assert_eq!(clock.registered(), 1);
        for (body, config) in second.system().bodies().iter().zip(config.bodies()) {
            assert_eq!(body.orbit.state().angle, config.initial_angle());
        }
    }

    #[test]
    fn test_unmount_with_stale_handle_still_retires() {
        let config = catalogue::builtin().unwrap();
        let mut clock = ManualClock::new();
        let scene = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut clock);
        clock.cancel(scene.handle());

        let retired = scene.unmount(&mut clock);
        assert!(!retired.is_live());
    }
}
