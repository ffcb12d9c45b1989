use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::MANIFEST_PATH;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::AppState;
use crate::engine::scene::body_config::{BodyEntry, ConfigResult, SolarSystemConfig};
use crate::engine::scene::catalogue;

/// Body list as a Bevy asset. Mirrors `assets/solar_system.json`; a missing
/// `star` falls back to the built-in one.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SolarSystemManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<BodyEntry>,
    pub bodies: Vec<BodyEntry>,
}

impl SolarSystemManifest {
    pub fn to_config(&self) -> ConfigResult<SolarSystemConfig> {
        let star = self.star.clone().unwrap_or_else(catalogue::star_entry);
        SolarSystemConfig::from_entries(star, self.bodies.clone())
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SolarSystemManifest>>,
}

pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

fn builtin_or_log() -> Option<SolarSystemConfig> {
    match catalogue::builtin() {
        Ok(config) => Some(config),
        Err(err) => {
            error!("Built-in catalogue rejected: {err}");
            None
        }
    }
}

/// Resolve the body list once the manifest has loaded or failed, then mount.
pub fn resolve_configuration(
    mut commands: Commands,
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<SolarSystemManifest>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let config = match &loader.handle {
        None => builtin_or_log(),
        Some(handle) => {
            if let Some(manifest) = manifests.get(handle) {
                match manifest.to_config() {
                    Ok(config) => {
                        info!(
                            "✓ Manifest loaded: {} bodies from {MANIFEST_PATH}",
                            config.bodies().len()
                        );
                        Some(config)
                    }
                    Err(err) => {
                        warn!("Manifest {MANIFEST_PATH} rejected ({err}), using built-in bodies");
                        builtin_or_log()
                    }
                }
            } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
                warn!("Manifest {MANIFEST_PATH} unavailable ({err}), using built-in bodies");
                builtin_or_log()
            } else {
                // Still loading.
                return;
            }
        }
    };

    if let Some(config) = config {
        commands.insert_resource(config);
        next_state.set(AppState::Mounted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::materials::MaterialKind;
    use crate::engine::scene::body_config::ConfigError;

    #[test]
    fn test_manifest_parses_and_converts() {
        let json = r##"{
            "bodies": [
                { "name": "Inner", "radius": 0.3, "orbit_distance": 4.0, "angular_speed": 1.0,
                  "material": "mercury", "color": "#9e9e9e" },
                { "name": "Ringed", "radius": 1.0, "orbit_distance": 12.0, "angular_speed": 0.3,
                  "material": "saturn", "color": "#e3cfa3", "glow": "#ffe8b8",
                  "ring_inner": 1.5, "ring_outer": 2.6 }
            ]
        }"##;
        let manifest: SolarSystemManifest = serde_json::from_str(json).unwrap();
        let config = manifest.to_config().unwrap();

        assert_eq!(config.star().material_kind(), MaterialKind::Sun);
        assert_eq!(config.bodies().len(), 2);
        assert_eq!(config.bodies()[1].material_kind(), MaterialKind::Saturn);
        assert!(config.bodies()[1].ring().is_some());
    }

    #[test]
    fn test_invalid_manifest_is_rejected() {
        let json = r##"{ "bodies": [ { "name": "Broken", "radius": -1.0 } ] }"##;
        let manifest: SolarSystemManifest = serde_json::from_str(json).unwrap();
        assert!(manifest.to_config().is_err());

        let empty: SolarSystemManifest = serde_json::from_str(r#"{ "bodies": [] }"#).unwrap();
        assert!(empty.to_config().is_err());
    }

    #[test]
    fn test_manifest_star_must_sit_at_origin() {
        let json = r##"{
            "star": { "name": "Wanderer", "radius": 3.0, "orbit_distance": 5.0, "material": "sun" },
            "bodies": [ { "name": "A", "radius": 0.5, "orbit_distance": 4.0 } ]
        }"##;
        let manifest: SolarSystemManifest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            manifest.to_config(),
            Err(ConfigError::StarOffOrigin { .. })
        ));
    }

    #[test]
    fn test_unknown_material_fails_to_parse() {
        let json = r##"{ "bodies": [ { "name": "X", "radius": 1.0, "material": "pluto" } ] }"##;
        assert!(serde_json::from_str::<SolarSystemManifest>(json).is_err());
    }

    #[test]
    fn test_bundled_manifest_matches_catalogue() {
        let bundled = include_str!("../../../assets/solar_system.json");
        let manifest: SolarSystemManifest = serde_json::from_str(bundled).unwrap();
        assert_eq!(manifest.to_config().unwrap(), catalogue::builtin().unwrap());
    }
}
