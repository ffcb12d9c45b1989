//! Rusty surface with drifting dust and whitened poles.

use bevy::math::Vec3;
use constants::procedural_shader::{MARS_TIME_SCALE, ROCKY_GAIN, ROCKY_OCTAVES};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{key_light, mix, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(ROCKY_OCTAVES, ROCKY_GAIN);

/// Dark, mid, light.
pub const PALETTE: [u32; 3] = [0x8e3b2a, 0xc4553b, 0xe07a5f];

const POLAR_CAP: Vec3 = Vec3::new(0.9, 0.9, 0.95);

/// Polar cap weight keyed on absolute latitude of the unit-sphere point.
pub fn polar_cap(point: Vec3) -> f32 {
    smoothstep(0.7, 1.0, point.normalize().y.abs())
}

/// Thresholded dust field scrolling with time.
pub fn dust(point: Vec3, time: f32) -> f32 {
    let t = time * MARS_TIME_SCALE;
    let field = FBM.sample(point.normalize() * 3.0 + Vec3::new(t, t * 0.5, -t * 0.7));
    smoothstep(0.3, 0.7, field)
}

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let [dark, mid, light, _] = palette.slots();
    let surface = FBM.sample(sample.point.normalize() * 5.0);
    let mut col = mix(dark, mid, surface);
    col = mix(col, light, dust(sample.point, time) * 0.3);
    col = mix(col, POLAR_CAP, polar_cap(sample.point) * 0.7);
    col * (0.7 + 0.3 * key_light(sample.normal.normalize()))
}
