//! Cratered grey surface: fbm base plus four fixed analytic craters, pushed
//! through a dark, mid, light ramp.

use bevy::math::Vec3;
use constants::procedural_shader::{ROCKY_GAIN, ROCKY_OCTAVES};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{key_light, mix, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(ROCKY_OCTAVES, ROCKY_GAIN);

/// Dark, mid, light.
pub const PALETTE: [u32; 3] = [0x6e6e6e, 0x9e9e9e, 0xc0c0c0];

/// Fixed crater layout: (frequency, centre offset, size, depth).
pub const CRATERS: [(f32, Vec3, f32, f32); 4] = [
    (5.0, Vec3::new(1.0, 0.5, -0.3), 0.2, -0.15),
    (4.0, Vec3::new(-0.5, 0.2, 0.8), 0.3, -0.1),
    (6.0, Vec3::new(0.2, -0.7, 0.4), 0.15, -0.2),
    (3.5, Vec3::new(-0.8, -0.2, -0.5), 0.25, -0.12),
];

/// Radial crater profile around the origin of `p`: `depth` at the centre,
/// a bright lip at `|p| == size`, zero far away.
pub fn crater(p: Vec3, size: f32, depth: f32) -> f32 {
    let d = p.length() / size;
    let lip = smoothstep(0.8, 1.0, d) * smoothstep(1.2, 1.0, d);
    let center = smoothstep(0.0, 0.8, d);
    depth + (lip * 0.2 - depth) * center
}

/// Surface relief: half-strength fbm plus every crater, additively.
pub fn relief(point: Vec3) -> f32 {
    let sp = point.normalize();
    let craters: f32 = CRATERS
        .iter()
        .map(|&(frequency, offset, size, depth)| crater(sp * frequency + offset, size, depth))
        .sum();
    FBM.sample(sp * 8.0) * 0.5 + craters
}

pub fn shade(sample: &SurfaceSample, _time: f32, palette: &Palette) -> Vec3 {
    let [dark, mid, light, _] = palette.slots();
    let surface = relief(sample.point);
    let mut col = mix(dark, mid, surface + 0.5);
    col = mix(col, light, smoothstep(0.5, 0.8, surface + 0.6));
    col * (0.7 + 0.3 * key_light(sample.normal.normalize()))
}
