//! Small shading helpers shared by the surface programs, with the same
//! semantics as their WGSL counterparts.

use bevy::math::Vec3;
use constants::procedural_shader::KEY_LIGHT_DIRECTION;

use crate::engine::noise::Fbm;

/// Hermite step, valid for reversed edges (`edge0 > edge1`) as in WGSL.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Axis the view-space normal is compared against for rim terms.
pub const VIEW_AXIS: Vec3 = Vec3::Z;

/// Fresnel-style rim: `(1 - max(n·v, 0))^power`. Zero facing the viewer,
/// one at grazing angles.
#[inline]
pub fn rim(normal: Vec3, power: f32) -> f32 {
    let ndotv = normal.dot(VIEW_AXIS).max(0.0);
    (1.0 - ndotv).powf(power)
}

/// Lambert term against the fixed key light.
#[inline]
pub fn key_light(normal: Vec3) -> f32 {
    let light = Vec3::from_array(KEY_LIGHT_DIRECTION).normalize();
    normal.dot(light).max(0.0)
}

/// Latitude banding shared by the gas giants.
///
/// `sin(latitude * frequency + fbm(warped point) * amplitude)` remapped to
/// `[0, 1]`. The fbm coordinate drifts along `(t, -t, t)`.
pub fn latitude_bands(
    point: Vec3,
    t: f32,
    frequency: f32,
    warp_scale: f32,
    amplitude: f32,
    fbm: Fbm,
) -> f32 {
    let warp = fbm.sample(point * warp_scale + Vec3::new(t, -t, t));
    (point.y * frequency + warp * amplitude).sin() * 0.5 + 0.5
}
