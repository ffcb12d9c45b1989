/// Orbital-rate scale `k`: one step at unit angular speed advances 0.01 rad.
pub const ORBIT_RATE_SCALE: f32 = 0.01;

/// Self-rotation added to every body each frame, independent of frame delta.
pub const SPIN_STEP: f32 = 0.01;

/// Frame rate the step unit is defined against; a frame delta of
/// `1.0 / REFERENCE_FRAME_RATE` seconds is one orbital step.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Frame deltas above this many seconds are clamped (tab switches, stalls).
pub const MAX_FRAME_DELTA_SECS: f32 = 0.25;
