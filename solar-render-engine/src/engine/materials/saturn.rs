//! Softer, tighter banding than Jupiter; the ring is scene geometry, not shading.

use bevy::math::Vec3;
use constants::procedural_shader::{GIANT_GAIN, GIANT_OCTAVES, SATURN_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{latitude_bands, mix, rim, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(GIANT_OCTAVES, GIANT_GAIN);

/// Dark, mid, light.
pub const PALETTE: [u32; 3] = [0xbba47f, 0xd8c39a, 0xefe2c6];

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let [dark, mid, light, _] = palette.slots();
    let t = time * SATURN_TIME_SCALE;

    let bands = latitude_bands(sample.point.normalize(), t, 11.0, 3.0, 2.0, FBM);
    let mut col = mix(dark, mid, bands);
    col = mix(col, light, smoothstep(0.65, 1.0, bands));
    col + Vec3::splat(rim(sample.normal.normalize(), 1.25) * 0.05)
}
