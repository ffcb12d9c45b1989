/// Horizontal (lateral and depth) drift amplitude in world units.
pub const DRIFT_AMPLITUDE_XZ: f32 = 0.8;

/// Vertical drift amplitude in world units.
pub const DRIFT_AMPLITUDE_Y: f32 = 0.3;

/// Angular speed of the drift ellipse in radians per second.
pub const DRIFT_SPEED: f32 = 0.2;

/// Ratio between the vertical and horizontal drift frequencies.
pub const DRIFT_VERTICAL_RATIO: f32 = 0.6;
