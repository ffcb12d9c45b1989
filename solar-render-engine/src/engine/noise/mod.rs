//! Deterministic 3D value noise shared by every procedural surface.
//!
//! The functions here are mirrored one-to-one in
//! `assets/shaders/planet_surface.wgsl`, so host evaluation and GPU output
//! agree for the same inputs. Everything is pure: identical input always
//! yields identical output, across runs and across platforms with IEEE f32.

use bevy::math::Vec3;
use constants::procedural_shader::{FBM_BASE_AMPLITUDE, FBM_LACUNARITY};

/// GLSL/WGSL `fract`: `x - floor(x)`, always in `[0, 1)` for finite input.
///
/// `f32::fract` truncates toward zero and goes negative for negative input,
/// which would break lattice hashing below the origin.
#[inline]
pub fn fract_gl(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn fract3(v: Vec3) -> Vec3 {
    v - v.floor()
}

/// Pseudo-random scalar in `[0, 1)` from a 3D coordinate.
///
/// Affine scramble into the unit cube, then a fractional multiply-and-sum.
/// Identical lattice points always hash identically, which keeps `noise3`
/// continuous across cell faces.
pub fn hash3(p: Vec3) -> f32 {
    let q = fract3(p * 0.318_309_9 + Vec3::new(0.1, 0.2, 0.3)) * 17.0;
    fract_gl(q.x * q.y * q.z * (q.x + q.y + q.z))
}

/// Value noise: smoothstep-weighted trilinear blend of the eight lattice
/// hashes around `p`. Continuous, in `[0, 1)`.
pub fn noise3(p: Vec3) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let corner = |x: f32, y: f32, z: f32| hash3(i + Vec3::new(x, y, z));

    let x00 = lerp(corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), u.x);
    let x10 = lerp(corner(0.0, 1.0, 0.0), corner(1.0, 1.0, 0.0), u.x);
    let x01 = lerp(corner(0.0, 0.0, 1.0), corner(1.0, 0.0, 1.0), u.x);
    let x11 = lerp(corner(0.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), u.x);

    let y0 = lerp(x00, x10, u.y);
    let y1 = lerp(x01, x11, u.y);

    lerp(y0, y1, u.z)
}

/// Fractal sum of `noise3` with lacunarity 2.0, starting at amplitude 0.5.
///
/// Output lies in `[0, amplitude_sum(octaves, gain))`.
pub fn fbm3(p: Vec3, octaves: u32, gain: f32) -> f32 {
    let mut sum = 0.0;
    let mut amplitude = FBM_BASE_AMPLITUDE;
    let mut p = p;
    for _ in 0..octaves {
        sum += amplitude * noise3(p);
        p *= FBM_LACUNARITY;
        amplitude *= gain;
    }
    sum
}

/// Exclusive upper bound of `fbm3` for the given octave count and gain.
pub fn amplitude_sum(octaves: u32, gain: f32) -> f32 {
    let mut sum = 0.0;
    let mut amplitude = FBM_BASE_AMPLITUDE;
    for _ in 0..octaves {
        sum += amplitude;
        amplitude *= gain;
    }
    sum
}

/// Octave count and gain of one fbm field, fixed per material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fbm {
    pub octaves: u32,
    pub gain: f32,
}

impl Fbm {
    pub const fn new(octaves: u32, gain: f32) -> Self {
        Self { octaves, gain }
    }

    #[inline]
    pub fn sample(&self, p: Vec3) -> f32 {
        fbm3(p, self.octaves, self.gain)
    }

    pub fn amplitude_sum(&self) -> f32 {
        amplitude_sum(self.octaves, self.gain)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Low-discrepancy sample points spread over a few hundred lattice cells.
    fn sample_points(count: usize) -> Vec<Vec3> {
        (0..count)
            .map(|i| {
                let i = i as f32;
                Vec3::new(
                    fract_gl(i * 0.754_877_7) * 23.0 - 11.5,
                    fract_gl(i * 0.569_840_3) * 23.0 - 11.5,
                    fract_gl(i * 0.362_123_4) * 23.0 - 11.5,
                )
            })
            .collect()
    }

    #[test]
    fn test_fract_gl_matches_shader_semantics() {
        assert_eq!(fract_gl(1.25), 0.25);
        assert_eq!(fract_gl(-0.25), 0.75);
        assert_eq!(fract_gl(-3.0), 0.0);
    }

    #[test]
    fn test_hash_range_and_determinism() {
        for p in sample_points(2000) {
            let h = hash3(p);
            assert!((0.0..1.0).contains(&h), "hash3({p}) = {h}");
            assert_eq!(h, hash3(p));
        }
    }

    #[test]
    fn test_noise_matches_hash_on_lattice() {
        for x in -4..4 {
            for y in -4..4 {
                for z in -4..4 {
                    let p = Vec3::new(x as f32, y as f32, z as f32);
                    assert_eq!(noise3(p), hash3(p));
                }
            }
        }
    }

    #[test]
    fn test_noise_range() {
        for p in sample_points(4000) {
            let n = noise3(p);
            assert!((0.0..1.0).contains(&n), "noise3({p}) = {n}");
        }
    }

    #[test]
    fn test_noise_is_continuous() {
        let eps = Vec3::splat(1.0e-4);
        for p in sample_points(2000) {
            let delta = (noise3(p) - noise3(p + eps)).abs();
            assert!(delta < 1.0e-2, "jump of {delta} at {p}");
        }

        // Crossing a cell face must not jump either.
        let face = Vec3::new(3.0, 0.4, -1.7);
        let below = noise3(face - Vec3::new(1.0e-4, 0.0, 0.0));
        let above = noise3(face + Vec3::new(1.0e-4, 0.0, 0.0));
        assert!((below - above).abs() < 1.0e-2);
    }

    #[test]
    fn test_noise_at_distant_points_is_uncorrelated() {
        let offset = Vec3::new(57.3, 113.1, 29.7);
        let points = sample_points(4096);
        let a: Vec<f32> = points.iter().map(|&p| noise3(p)).collect();
        let b: Vec<f32> = points.iter().map(|&p| noise3(p + offset)).collect();

        let n = a.len() as f32;
        let mean_a = a.iter().sum::<f32>() / n;
        let mean_b = b.iter().sum::<f32>() / n;
        let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
        for (x, y) in a.iter().zip(&b) {
            cov += (x - mean_a) * (y - mean_b);
            var_a += (x - mean_a).powi(2);
            var_b += (y - mean_b).powi(2);
        }
        let correlation = cov / (var_a.sqrt() * var_b.sqrt());

        assert!(correlation.abs() < 0.1, "correlation {correlation}");
        assert!((0.3..0.7).contains(&mean_a), "mean {mean_a}");
    }

    #[test]
    fn test_fbm_range() {
        for (octaves, gain) in [(5, 0.5), (5, 0.55), (6, 0.5), (6, 0.6)] {
            let bound = amplitude_sum(octaves, gain);
            for p in sample_points(1500) {
                let v = fbm3(p, octaves, gain);
                assert!(v >= 0.0 && v < bound, "fbm {v} outside [0, {bound})");
            }
        }
    }

    #[test]
    fn test_amplitude_sum() {
        assert!((amplitude_sum(1, 0.5) - 0.5).abs() < 1e-6);
        assert!((amplitude_sum(6, 0.5) - 0.984_375).abs() < 1e-6);
        assert_eq!(amplitude_sum(0, 0.5), 0.0);
        assert_eq!(Fbm::new(6, 0.5).amplitude_sum(), amplitude_sum(6, 0.5));
    }

    #[test]
    fn test_more_octaves_add_high_frequency_variance() {
        let step = Vec3::new(0.01, 0.0, 0.0);
        let points = sample_points(2000);
        let roughness = |octaves: u32| {
            points
                .iter()
                .map(|&p| (fbm3(p + step, octaves, 0.5) - fbm3(p, octaves, 0.5)).powi(2))
                .sum::<f32>()
                / points.len() as f32
        };

        let mut previous = roughness(1);
        for octaves in 2..=6 {
            let current = roughness(octaves);
            assert!(
                current > previous,
                "octave {octaves}: {current} <= {previous}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_extra_octaves_stay_within_their_amplitude() {
        for p in sample_points(1000) {
            let base = fbm3(p, 1, 0.55);
            let full = fbm3(p, 5, 0.55);
            let tail = amplitude_sum(5, 0.55) - amplitude_sum(1, 0.55);
            assert!(full >= base);
            assert!(full - base < tail);
        }
    }
}
