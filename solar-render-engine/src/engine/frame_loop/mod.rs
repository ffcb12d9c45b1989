//! Frame loop driving the mounted scene.
//!
//! Per-frame state lives in one owned [`SolarSystem`] that a registered
//! callback steps each frame. The scheduler is abstract so tests drive it
//! with a manual clock and the app drives the same clock from Bevy's `Time`.

/// Frame scheduler trait, handles and the manual clock.
pub mod scheduler;

/// Owned per-frame simulation state and its step function.
pub mod simulation;

/// Mount and unmount of the frame state against a scheduler.
pub mod mount;

use bevy::prelude::*;

use mount::MountedScene;
use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualClock};
use simulation::SolarSystem;

/// App-wide scheduler, stepped once per `Update` with the frame delta.
#[derive(Resource, Default)]
pub struct FrameLoop {
    clock: ManualClock<SolarSystem>,
}

impl FrameLoop {
    pub fn registered(&self) -> usize {
        self.clock.registered()
    }
}

impl FrameScheduler<SolarSystem> for FrameLoop {
    fn request_frame(&mut self, callback: FrameCallback<SolarSystem>) -> FrameHandle {
        self.clock.request_frame(callback)
    }

    fn cancel(&mut self, handle: FrameHandle) -> bool {
        self.clock.cancel(handle)
    }
}

pub fn drive_frame_loop(
    time: Res<Time>,
    mut frame_loop: ResMut<FrameLoop>,
    mut scene: ResMut<MountedScene>,
) {
    frame_loop
        .clock
        .advance(scene.system_mut(), time.delta_secs());
}
