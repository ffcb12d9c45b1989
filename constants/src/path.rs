/// Body manifest, relative to the asset root.
pub const MANIFEST_PATH: &str = "solar_system.json";
