/// Radius of the central star.
pub const SUN_RADIUS: f32 = 3.0;

/// Star sphere resolution (sectors, stacks).
pub const SUN_SEGMENTS: (u32, u32) = (96, 96);

/// Body sphere resolution (sectors, stacks).
pub const BODY_SEGMENTS: (u32, u32) = (64, 64);

/// Shell sphere resolution (sectors, stacks) for the atmosphere.
pub const ATMOSPHERE_SEGMENTS: (u32, u32) = (32, 32);

/// Orbit guides and planet rings share this angular resolution.
pub const RING_RESOLUTION: u32 = 256;

/// Half the width of an orbit-guide ring.
pub const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.05;

/// Opacity of orbit-guide rings.
pub const ORBIT_GUIDE_OPACITY: f32 = 0.3;

/// Glow shell radius relative to the body radius.
pub const GLOW_SHELL_SCALE: f32 = 1.03;

/// Opacity of glow shells.
pub const GLOW_SHELL_OPACITY: f32 = 0.12;

/// Atmosphere shell radius relative to the body radius.
pub const ATMOSPHERE_SHELL_SCALE: f32 = 1.05;

/// Opacity of the atmosphere shell.
pub const ATMOSPHERE_SHELL_OPACITY: f32 = 0.15;

/// Atmosphere shell colour (sRGB hex).
pub const ATMOSPHERE_COLOR: u32 = 0x93c5fd;

/// Only the body at this position in the configuration list gets an atmosphere.
pub const ATMOSPHERE_BODY_INDEX: usize = 2;

/// Planet ring colour (sRGB hex).
pub const PLANET_RING_COLOR: u32 = 0xd9c89c;

/// Opacity of planet rings.
pub const PLANET_RING_OPACITY: f32 = 0.7;

/// Fallback body colour when a configuration omits one (sRGB hex).
pub const DEFAULT_FALLBACK_COLOR: u32 = 0x888888;

/// Roughness and metalness for fallback-coloured bodies.
pub const FALLBACK_ROUGHNESS: f32 = 0.7;
pub const FALLBACK_METALNESS: f32 = 0.3;

/// Star light colour (sRGB hex).
pub const STAR_LIGHT_COLOR: u32 = 0xfdb813;

/// Conversion from the scene's unitless light intensities to Bevy units.
pub const POINT_LIGHT_LUMENS_PER_UNIT: f32 = 100_000.0;
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 2_000.0;
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 150.0;
