//! Runtime diagnostics systems.

/// FPS logging and the native FPS overlay text.
pub mod fps_tracking;
