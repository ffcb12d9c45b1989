//! Thick cloud deck: two drifting cloud octaves and a fine detail layer,
//! with the brightest tops pulled into a highlight band.

use bevy::math::Vec3;
use constants::procedural_shader::{ROCKY_GAIN, ROCKY_OCTAVES, VENUS_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{key_light, mix, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(ROCKY_OCTAVES, ROCKY_GAIN);

/// Base, cloud, highlight.
pub const PALETTE: [u32; 3] = [0xcdb28a, 0xe6d7b8, 0xf5ecd6];

/// Cloud density, roughly centred on 0.5 and above 1.0 at the thickest tops.
pub fn cloud_cover(point: Vec3, time: f32) -> f32 {
    let sp = point.normalize();
    let t = time * VENUS_TIME_SCALE;
    let mut clouds = FBM.sample(sp * 2.0 + Vec3::new(t * 0.2, t * 0.3, -t * 0.1));
    clouds += FBM.sample(sp * 4.0 + Vec3::new(-t * 0.1, t * 0.2, t * 0.3)) * 0.5;
    let detail = FBM.sample(sp * 8.0 + Vec3::new(t * 0.4, -t * 0.3, t * 0.2)) * 0.25;
    clouds * 0.5 + 0.5 + detail
}

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let [base, cloud, highlight, _] = palette.slots();
    let clouds = cloud_cover(sample.point, time);
    let mut col = mix(base, cloud, clouds);
    col = mix(col, highlight, smoothstep(0.7, 0.9, clouds) * 0.7);
    col * (0.8 + 0.2 * key_light(sample.normal.normalize()))
}
