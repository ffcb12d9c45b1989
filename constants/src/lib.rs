//! Shared tuning constants for the solar system renderer.
//!
//! Values live here so the host-side simulation, the WGSL programs and the
//! scene builder agree on the same numbers.

/// Camera drift amplitudes and speeds.
pub mod camera;

/// Web mount container and canvas identifiers.
pub mod mount;

/// Asset paths.
pub mod path;

/// Orbital rate scale and per-frame spin increment.
pub mod orbit;

/// Octave counts, gains and time scales for each surface program.
pub mod procedural_shader;

/// Camera projection, tone mapping and output settings.
pub mod render_settings;

/// Mesh resolutions, shell scales and translucency of scene parts.
pub mod scene;

/// Starfield particle count and shell dimensions.
pub mod starfield;
