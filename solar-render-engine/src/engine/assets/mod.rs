//! Runtime-loaded assets.

/// Optional JSON body manifest replacing the built-in catalogue.
pub mod manifest;
