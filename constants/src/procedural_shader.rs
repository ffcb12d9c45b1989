/// Every fbm sum starts at this amplitude.
pub const FBM_BASE_AMPLITUDE: f32 = 0.5;

/// Frequency multiplier between fbm octaves.
pub const FBM_LACUNARITY: f32 = 2.0;

/// Sun granulation: octaves, gain, time scale.
pub const SUN_OCTAVES: u32 = 6;
pub const SUN_GAIN: f32 = 0.6;
pub const SUN_TIME_SCALE: f32 = 0.6;

/// Rocky bodies (Mercury, Venus, Mars).
pub const ROCKY_OCTAVES: u32 = 6;
pub const ROCKY_GAIN: f32 = 0.5;

/// Venus cloud drift time scale.
pub const VENUS_TIME_SCALE: f32 = 0.1;

/// Mars dust drift time scale.
pub const MARS_TIME_SCALE: f32 = 0.1;

/// Banded giants (Jupiter, Saturn, Neptune).
pub const GIANT_OCTAVES: u32 = 5;
pub const GIANT_GAIN: f32 = 0.55;

/// Uranus uses a flatter spectrum than the other giants.
pub const URANUS_OCTAVES: u32 = 5;
pub const URANUS_GAIN: f32 = 0.5;

/// Band time scales per giant.
pub const JUPITER_TIME_SCALE: f32 = 0.03;
pub const SATURN_TIME_SCALE: f32 = 0.025;
pub const URANUS_TIME_SCALE: f32 = 0.05;
pub const NEPTUNE_TIME_SCALE: f32 = 0.05;

/// Direction of the fixed key light used by diffuse terms (normalised in use).
pub const KEY_LIGHT_DIRECTION: [f32; 3] = [1.0, 0.5, 0.2];
