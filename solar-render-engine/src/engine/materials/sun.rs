//! Star surface: drifting granulation between two base colours plus a warm
//! limb highlight.

use bevy::math::Vec3;
use constants::procedural_shader::{SUN_GAIN, SUN_OCTAVES, SUN_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{mix, rim, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(SUN_OCTAVES, SUN_GAIN);

/// Cool and hot base colours.
pub const PALETTE: [u32; 2] = [0xff6a00, 0xffd54d];

const RIM_COLOR: Vec3 = Vec3::new(1.2, 0.8, 0.2);
const RIM_POWER: f32 = 1.5;

/// Granule mask in `[0, 1]`: product of two independently drifting fields,
/// each smoothstep-thresholded.
pub fn granules(point: Vec3, time: f32) -> f32 {
    let p = point.normalize() * 2.0;
    let t = time * SUN_TIME_SCALE;
    let large = FBM.sample(p * 1.8 + Vec3::new(t * 0.5, t * 0.7, -t * 0.4));
    let cells = FBM.sample(p * 6.0 + Vec3::new(-t * 1.2, t * 1.1, t * 0.9));
    smoothstep(0.3, 0.8, large) * smoothstep(0.35, 0.8, cells)
}

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let base = mix(palette.color(0), palette.color(1), granules(sample.point, time));
    base + RIM_COLOR * rim(sample.normal.normalize(), RIM_POWER)
}
