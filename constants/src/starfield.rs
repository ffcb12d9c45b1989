/// Number of stars in the backdrop.
pub const STAR_COUNT: usize = 8000;

/// Inner radius of the star shell.
pub const STAR_SHELL_RADIUS: f32 = 150.0;

/// Thickness of the star shell.
pub const STAR_SHELL_DEPTH: f32 = 80.0;

/// Size factor for individual stars.
pub const STAR_SIZE_FACTOR: f32 = 4.5;

/// World size of a star at size factor 1.0.
pub const STAR_BASE_SIZE: f32 = 0.05;

/// Colour saturation of stars. Zero gives a grey-scale field.
pub const STAR_SATURATION: f32 = 0.0;
