//! Camera behaviour for the background scene.
//!
//! The scene has no user controls; the camera only drifts slowly around the
//! position it was given at mount.

/// Idle drift rig: lazily captured baseline plus a smooth elliptical offset.
pub mod idle_drift;

use bevy::prelude::*;

use crate::engine::frame_loop::mount::MountedScene;

/// Marker for the camera the frame loop drives.
#[derive(Component)]
pub struct SolarCamera;

/// Apply the frame state's camera position, always looking at the star.
pub fn sync_camera(
    scene: Res<MountedScene>,
    mut cameras: Query<&mut Transform, With<SolarCamera>>,
) {
    let position = scene.system().camera_position();
    for mut transform in &mut cameras {
        *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
