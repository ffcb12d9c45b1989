//! Procedural solar system background renderer.
//!
//! A star, eight planets with procedural surfaces, rings, orbit guides and a
//! starfield, mounted behind a web page or in a native window.

pub mod engine;
