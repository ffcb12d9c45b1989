use bevy::prelude::*;
use constants::scene::DEFAULT_FALLBACK_COLOR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::materials::MaterialKind;
use crate::engine::orbit::OrbitParams;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejections raised while building body configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body `{name}`: radius must be positive, got {radius}")]
    NonPositiveRadius { name: String, radius: f32 },

    #[error("body `{name}`: orbit distance must not be negative, got {distance}")]
    NegativeOrbitDistance { name: String, distance: f32 },

    #[error("body `{name}`: {field} is not a finite number")]
    NonFinite { name: String, field: &'static str },

    #[error("body `{name}`: ring needs both inner and outer bounds")]
    IncompleteRing { name: String },

    #[error("body `{name}`: ring inner bound {inner} must be below outer bound {outer}")]
    UnorderedRing { name: String, inner: f32, outer: f32 },

    #[error("body `{name}`: ring inner bound must be positive, got {inner}")]
    NonPositiveRing { name: String, inner: f32 },

    #[error("star `{name}` must sit at the origin, got orbit distance {distance}")]
    StarOffOrigin { name: String, distance: f32 },

    #[error("body `{name}`: only the star may sit at the origin")]
    BodyAtOrigin { name: String },

    #[error("invalid colour `{0}`, expected `#rrggbb`")]
    InvalidColor(String),

    #[error("solar system has no orbiting bodies")]
    NoBodies,
}

/// sRGB colour written as `#rrggbb` in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u32);

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        value.as_str().parse()
    }
}

impl std::str::FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(value: &str) -> ConfigResult<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(value.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| ConfigError::InvalidColor(value.to_string()))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        format!("#{:06x}", color.0)
    }
}

/// Inner and outer ring radii as fractions of the body radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    pub inner: f32,
    pub outer: f32,
}

/// Raw body description as written in a manifest or the built-in catalogue.
/// Unvalidated; convert with [`CelestialBodyConfig::try_from`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyEntry {
    pub name: String,
    pub radius: f32,
    #[serde(default)]
    pub orbit_distance: f32,
    #[serde(default)]
    pub angular_speed: f32,
    #[serde(default)]
    pub initial_angle: f32,
    #[serde(default)]
    pub axial_tilt: f32,
    #[serde(default = "default_material")]
    pub material: MaterialKind,
    #[serde(default = "default_color")]
    pub color: HexColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_inner: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_outer: Option<f32>,
}

fn default_material() -> MaterialKind {
    MaterialKind::Generic
}

fn default_color() -> HexColor {
    HexColor(DEFAULT_FALLBACK_COLOR)
}

/// Validated, immutable description of one body.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBodyConfig {
    name: String,
    radius: f32,
    orbit_distance: f32,
    angular_speed: f32,
    initial_angle: f32,
    axial_tilt: f32,
    material_kind: MaterialKind,
    fallback_color: u32,
    glow_color: Option<u32>,
    ring: Option<RingBounds>,
}

impl TryFrom<BodyEntry> for CelestialBodyConfig {
    type Error = ConfigError;

    fn try_from(entry: BodyEntry) -> ConfigResult<Self> {
        let name = entry.name;
        let finite = [
            ("radius", entry.radius),
            ("orbit_distance", entry.orbit_distance),
            ("angular_speed", entry.angular_speed),
            ("initial_angle", entry.initial_angle),
            ("axial_tilt", entry.axial_tilt),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, field });
            }
        }

        if entry.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                name,
                radius: entry.radius,
            });
        }
        if entry.orbit_distance < 0.0 {
            return Err(ConfigError::NegativeOrbitDistance {
                name,
                distance: entry.orbit_distance,
            });
        }

        let ring = match (entry.ring_inner, entry.ring_outer) {
            (None, None) => None,
            (Some(inner), Some(outer)) => {
                if !inner.is_finite() || !outer.is_finite() {
                    return Err(ConfigError::NonFinite {
                        name,
                        field: "ring",
                    });
                }
                if inner <= 0.0 {
                    return Err(ConfigError::NonPositiveRing { name, inner });
                }
                if inner >= outer {
                    return Err(ConfigError::UnorderedRing { name, inner, outer });
                }
                Some(RingBounds { inner, outer })
            }
            _ => return Err(ConfigError::IncompleteRing { name }),
        };

        Ok(Self {
            name,
            radius: entry.radius,
            orbit_distance: entry.orbit_distance,
            angular_speed: entry.angular_speed,
            initial_angle: entry.initial_angle,
            axial_tilt: entry.axial_tilt,
            material_kind: entry.material,
            fallback_color: entry.color.0,
            glow_color: entry.glow.map(|c| c.0),
            ring,
        })
    }
}

impl CelestialBodyConfig {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn initial_angle(&self) -> f32 {
        self.initial_angle
    }

    pub fn axial_tilt(&self) -> f32 {
        self.axial_tilt
    }

    pub fn material_kind(&self) -> MaterialKind {
        self.material_kind
    }

    pub fn fallback_color(&self) -> u32 {
        self.fallback_color
    }

    pub fn glow_color(&self) -> Option<u32> {
        self.glow_color
    }

    pub fn ring(&self) -> Option<RingBounds> {
        self.ring
    }

    pub fn orbit_params(&self) -> OrbitParams {
        OrbitParams {
            distance: self.orbit_distance,
            angular_speed: self.angular_speed,
            axial_tilt: self.axial_tilt,
        }
    }
}

/// The star plus the ordered list of orbiting bodies, supplied once per mount.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SolarSystemConfig {
    star: CelestialBodyConfig,
    bodies: Vec<CelestialBodyConfig>,
}

impl SolarSystemConfig {
    /// Validate every entry. The star must sit at the origin and every
    /// orbiting body must be off it.
    pub fn from_entries(star: BodyEntry, bodies: Vec<BodyEntry>) -> ConfigResult<Self> {
        if bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let star = CelestialBodyConfig::try_from(star)?;
        if star.orbit_distance != 0.0 {
            return Err(ConfigError::StarOffOrigin {
                name: star.name,
                distance: star.orbit_distance,
            });
        }

        let bodies = bodies
            .into_iter()
            .map(CelestialBodyConfig::try_from)
            .collect::<ConfigResult<Vec<_>>>()?;
        if let Some(body) = bodies.iter().find(|body| body.orbit_distance <= 0.0) {
            return Err(ConfigError::BodyAtOrigin {
                name: body.name.clone(),
            });
        }

        Ok(Self { star, bodies })
    }

    pub fn star(&self) -> &CelestialBodyConfig {
        &self.star
    }

    pub fn bodies(&self) -> &[CelestialBodyConfig] {
        &self.bodies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> BodyEntry {
        BodyEntry {
            name: name.to_string(),
            radius: 1.0,
            orbit_distance: 10.0,
            angular_speed: 1.0,
            initial_angle: 0.0,
            axial_tilt: 0.0,
            material: MaterialKind::Generic,
            color: HexColor(0x123456),
            glow: None,
            ring_inner: None,
            ring_outer: None,
        }
    }

    #[test]
    fn test_valid_entry_converts() {
        let config = CelestialBodyConfig::try_from(BodyEntry {
            ring_inner: Some(1.5),
            ring_outer: Some(2.6),
            glow: Some(HexColor(0xffe8b8)),
            ..entry("saturn")
        })
        .unwrap();
        assert_eq!(config.name(), "saturn");
        assert_eq!(
            config.ring(),
            Some(RingBounds {
                inner: 1.5,
                outer: 2.6
            })
        );
        assert_eq!(config.glow_color(), Some(0xffe8b8));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let zero_radius = BodyEntry {
            radius: 0.0,
            ..entry("a")
        };
        assert!(matches!(
            CelestialBodyConfig::try_from(zero_radius),
            Err(ConfigError::NonPositiveRadius { .. })
        ));

        let negative = BodyEntry {
            orbit_distance: -1.0,
            ..entry("b")
        };
        assert!(matches!(
            CelestialBodyConfig::try_from(negative),
            Err(ConfigError::NegativeOrbitDistance { .. })
        ));

        let nan_speed = BodyEntry {
            angular_speed: f32::NAN,
            ..entry("c")
        };
        assert_eq!(
            CelestialBodyConfig::try_from(nan_speed),
            Err(ConfigError::NonFinite {
                name: "c".to_string(),
                field: "angular_speed"
            })
        );
    }

    #[test]
    fn test_ring_bounds_are_both_or_neither_and_ordered() {
        let half = BodyEntry {
            ring_inner: Some(1.5),
            ..entry("half")
        };
        assert!(matches!(
            CelestialBodyConfig::try_from(half),
            Err(ConfigError::IncompleteRing { .. })
        ));

        let swapped = BodyEntry {
            ring_inner: Some(2.6),
            ring_outer: Some(1.5),
            ..entry("swapped")
        };
        assert!(matches!(
            CelestialBodyConfig::try_from(swapped),
            Err(ConfigError::UnorderedRing { .. })
        ));

        for inner in [0.0, -0.5] {
            let inverted = BodyEntry {
                ring_inner: Some(inner),
                ring_outer: Some(2.0),
                ..entry("inverted")
            };
            assert!(matches!(
                CelestialBodyConfig::try_from(inverted),
                Err(ConfigError::NonPositiveRing { .. })
            ));
        }
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!("#c4553b".parse::<HexColor>(), Ok(HexColor(0xc4553b)));
        assert_eq!("9e9e9e".parse::<HexColor>(), Ok(HexColor(0x9e9e9e)));
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#gggggg".parse::<HexColor>().is_err());
        assert!("+abcde".parse::<HexColor>().is_err());
        assert!("#+abcde".parse::<HexColor>().is_err());
        assert!("-abcde".parse::<HexColor>().is_err());
        assert_eq!(String::from(HexColor(0x0000ff)), "#0000ff");
    }

    #[test]
    fn test_entry_defaults_from_json() {
        let parsed: BodyEntry =
            serde_json::from_str(r#"{ "name": "rock", "radius": 0.5 }"#).unwrap();
        assert_eq!(parsed.material, MaterialKind::Generic);
        assert_eq!(parsed.color, HexColor(DEFAULT_FALLBACK_COLOR));
        assert_eq!(parsed.orbit_distance, 0.0);
        assert!(parsed.glow.is_none());
    }

    fn star() -> BodyEntry {
        BodyEntry {
            orbit_distance: 0.0,
            material: MaterialKind::Sun,
            ..entry("sun")
        }
    }

    #[test]
    fn test_system_needs_bodies() {
        assert_eq!(
            SolarSystemConfig::from_entries(star(), Vec::new()),
            Err(ConfigError::NoBodies)
        );
        let system = SolarSystemConfig::from_entries(star(), vec![entry("a")]).unwrap();
        assert_eq!(system.bodies().len(), 1);
    }

    #[test]
    fn test_only_the_star_sits_at_the_origin() {
        let at_origin = BodyEntry {
            orbit_distance: 0.0,
            ..entry("centre")
        };
        assert_eq!(
            SolarSystemConfig::from_entries(star(), vec![entry("a"), at_origin]),
            Err(ConfigError::BodyAtOrigin {
                name: "centre".to_string()
            })
        );

        let drifting_star = BodyEntry {
            orbit_distance: 3.0,
            ..star()
        };
        assert!(matches!(
            SolarSystemConfig::from_entries(drifting_star, vec![entry("a")]),
            Err(ConfigError::StarOffOrigin { distance, .. }) if distance == 3.0
        ));
    }
}
