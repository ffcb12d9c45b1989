use bevy::math::Vec3;

/// Camera position requested at mount time.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 10.0, 25.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Device pixel ratio is clamped into this range on the web.
pub const DEVICE_PIXEL_RATIO_RANGE: (f32, f32) = (1.0, 2.0);

/// Linear exposure multiplier applied before the filmic curve.
pub const TONE_MAPPING_EXPOSURE: f32 = 1.1;

/// MSAA sample count for the main camera.
pub const MSAA_SAMPLES: u32 = 4;

/// Far clip plane, large enough to contain the starfield shell.
pub const CAMERA_FAR_PLANE: f32 = 400.0;
