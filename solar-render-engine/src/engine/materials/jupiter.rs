//! Banded giant with a fixed great storm spot.

use bevy::math::Vec3;
use constants::procedural_shader::{GIANT_GAIN, GIANT_OCTAVES, JUPITER_TIME_SCALE};

use super::SurfaceSample;
use super::palette::Palette;
use super::shading::{latitude_bands, mix, rim, smoothstep};
use crate::engine::noise::Fbm;

pub const FBM: Fbm = Fbm::new(GIANT_OCTAVES, GIANT_GAIN);

/// Dark, mid, light, storm spot.
pub const PALETTE: [u32; 4] = [0x8c6d4d, 0xcaa27f, 0xe6d1b8, 0xc15c2a];

/// Off-axis centre of the storm on the unit sphere (normalised in use).
pub const SPOT_CENTER: Vec3 = Vec3::new(0.4, -0.2, 0.9);

/// Angular radius (chord length) of the spot falloff.
pub const SPOT_RADIUS: f32 = 0.25;

/// Storm weight in `[0, 1]`: radial falloff from the spot centre modulated
/// by a faster swirl field.
pub fn storm_spot(point: Vec3, time: f32) -> f32 {
    let sp = point.normalize();
    let t = time * JUPITER_TIME_SCALE;
    let falloff = smoothstep(SPOT_RADIUS, 0.0, sp.distance(SPOT_CENTER.normalize()));
    let swirl = FBM.sample(sp * 6.0 + Vec3::new(-t * 2.5, t * 1.7, -t * 1.3));
    falloff * (0.8 + 0.2 * swirl)
}

pub fn shade(sample: &SurfaceSample, time: f32, palette: &Palette) -> Vec3 {
    let [dark, mid, light, spot] = palette.slots();
    let sp = sample.point.normalize();
    let t = time * JUPITER_TIME_SCALE;

    let bands = latitude_bands(sp, t, 10.0, 4.0, 2.5, FBM);
    let mut col = mix(dark, mid, bands);
    col = mix(col, light, smoothstep(0.6, 1.0, bands));
    col = mix(col, spot, storm_spot(sp, time) * 0.9);
    col + Vec3::splat(rim(sample.normal.normalize(), 1.3) * 0.06)
}
