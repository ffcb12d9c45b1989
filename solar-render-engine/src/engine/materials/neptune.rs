//! Deep blue giant with transient bright storms.

use bevy::math::Vec3;
use constants::procedural_shader::{GIANT_GAIN, GIANT_OCTAVES, NEPTUNE_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{latitude_bands, mix, rim, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(GIANT_OCTAVES, GIANT_GAIN);

/// Deep, mid, light.
pub const PALETTE: [u32; 3] = [0x1237b3, 0x2e6cf6, 0x7fb4ff];

/// Storm highlight in `[0, 1]`; only the upper tail of a drifting fbm field
/// survives the threshold, so storms appear and fade as the field moves.
pub fn storms(point: Vec3, time: f32) -> f32 {
    let t = time * NEPTUNE_TIME_SCALE;
    let field = FBM.sample(point.normalize() * 5.0 + Vec3::new(-t * 1.3, t * 0.7, t * 0.9));
    smoothstep(0.75, 1.0, field)
}

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let [deep, mid, light, _] = palette.slots();
    let sp = sample.point.normalize();
    let t = time * NEPTUNE_TIME_SCALE;

    let bands = latitude_bands(sp, t, 10.0, 3.0, 2.0, FBM);
    let mut col = mix(deep, mid, bands);
    col = mix(col, light, smoothstep(0.6, 1.0, bands));
    col += Vec3::splat(storms(sp, time) * 0.08);
    col + Vec3::splat(rim(sample.normal.normalize(), 1.2) * 0.05)
}
