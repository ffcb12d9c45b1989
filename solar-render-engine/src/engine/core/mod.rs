//! Core application setup and state management.
//!
//! Handles application lifecycle, window and mount-surface configuration,
//! state transitions, and plugin initialisation for native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the app with the surface material, manifest loading, frame loop
/// and mount/unmount scheduling.
pub mod app_setup;

/// Scene lifecycle states and their transitions.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the web canvas, clamps the device pixel ratio and sets vsync.
pub mod window_config;

/// Web mount container: finds or creates the host element and canvas.
pub mod web_mount;
