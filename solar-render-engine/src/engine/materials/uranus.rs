//! Pale, nearly featureless ice giant: faint bands and a slow cloud layer
//! over two colours.

use bevy::math::Vec3;
use constants::procedural_shader::{URANUS_GAIN, URANUS_OCTAVES, URANUS_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{key_light, latitude_bands, mix, rim};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(URANUS_OCTAVES, URANUS_GAIN);

/// Base, cloud.
pub const PALETTE: [u32; 2] = [0x7fd6e7, 0xb7f0ff];

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let sp = sample.point.normalize();
    let nrm = sample.normal.normalize();
    let t = time * URANUS_TIME_SCALE;

    let bands = latitude_bands(sp, t, 8.0, 2.0, 1.5, FBM);
    let clouds = FBM.sample(sp * 3.0 + Vec3::new(-t * 0.2, t * 0.1, t * 0.15));
    let mut col = mix(palette.color(0), palette.color(1), bands * 0.3 + clouds * 0.2);
    col *= 0.8 + 0.2 * key_light(nrm);
    col + Vec3::splat(rim(nrm, 1.2) * 0.04)
}
