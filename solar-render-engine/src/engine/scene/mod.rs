//! Scene description and construction.
//!
//! Body configuration and validation, the built-in catalogue, the pure scene
//! layout, the procedural starfield, and the Bevy spawner that realises the
//! layout and keeps it in step with the frame loop.

/// Body configuration entries, validation and the `ConfigError` type.
pub mod body_config;

/// Built-in star and eight-planet catalogue.
pub mod catalogue;

/// Pure scene layout (`SceneBlueprint`) built from the body list.
pub mod composer;

/// Hash-seeded starfield generation and its merged mesh.
pub mod starfield;

/// Entity spawning, mount/unmount systems and per-frame sync.
pub mod spawn;
