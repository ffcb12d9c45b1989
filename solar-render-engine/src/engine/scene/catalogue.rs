//! Built-in star and planet list, used when no manifest is supplied.

use constants::scene::SUN_RADIUS;

use super::body_config::{BodyEntry, ConfigResult, HexColor, SolarSystemConfig};
use crate::engine::materials::MaterialKind;

struct Planet {
    name: &'static str,
    radius: f32,
    distance: f32,
    speed: f32,
    angle: f32,
    tilt: f32,
    material: MaterialKind,
    color: u32,
    glow: Option<u32>,
    ring: Option<(f32, f32)>,
}

const PLANETS: [Planet; 8] = [
    Planet {
        name: "Mercury",
        radius: 0.25,
        distance: 4.0,
        speed: 1.2,
        angle: 0.0,
        tilt: 0.0,
        material: MaterialKind::Mercury,
        color: 0x9e9e9e,
        glow: None,
        ring: None,
    },
    Planet {
        name: "Venus",
        radius: 0.35,
        distance: 6.0,
        speed: 0.9,
        angle: 1.0,
        tilt: 0.0,
        material: MaterialKind::Venus,
        color: 0xcdb28a,
        glow: None,
        ring: None,
    },
    Planet {
        name: "Earth",
        radius: 0.5,
        distance: 8.5,
        speed: 0.7,
        angle: 2.0,
        tilt: 0.41,
        material: MaterialKind::Earth,
        color: 0x3a78ff,
        glow: Some(0x9fd3ff),
        ring: None,
    },
    Planet {
        name: "Mars",
        radius: 0.4,
        distance: 11.0,
        speed: 0.6,
        angle: 3.0,
        tilt: 0.0,
        material: MaterialKind::Mars,
        color: 0xc4553b,
        glow: None,
        ring: None,
    },
    Planet {
        name: "Jupiter",
        radius: 1.2,
        distance: 15.0,
        speed: 0.35,
        angle: 0.7,
        tilt: 0.0,
        material: MaterialKind::Jupiter,
        color: 0xd1a67a,
        glow: Some(0xffd9a8),
        ring: None,
    },
    Planet {
        name: "Saturn",
        radius: 1.0,
        distance: 20.0,
        speed: 0.3,
        angle: 1.7,
        tilt: 0.47,
        material: MaterialKind::Saturn,
        color: 0xe3cfa3,
        glow: Some(0xffe8b8),
        ring: Some((1.5, 2.6)),
    },
    Planet {
        name: "Uranus",
        radius: 0.85,
        distance: 24.0,
        speed: 0.25,
        angle: 0.4,
        tilt: -1.0,
        material: MaterialKind::Uranus,
        color: 0x7fd6e7,
        glow: Some(0xb7f0ff),
        ring: None,
    },
    Planet {
        name: "Neptune",
        radius: 0.8,
        distance: 28.0,
        speed: 0.22,
        angle: 1.1,
        tilt: 0.49,
        material: MaterialKind::Neptune,
        color: 0x2e6cf6,
        glow: Some(0x6aa7ff),
        ring: None,
    },
];

impl Planet {
    fn entry(&self) -> BodyEntry {
        BodyEntry {
            name: self.name.to_string(),
            radius: self.radius,
            orbit_distance: self.distance,
            angular_speed: self.speed,
            initial_angle: self.angle,
            axial_tilt: self.tilt,
            material: self.material,
            color: HexColor(self.color),
            glow: self.glow.map(HexColor),
            ring_inner: self.ring.map(|(inner, _)| inner),
            ring_outer: self.ring.map(|(_, outer)| outer),
        }
    }
}

pub fn star_entry() -> BodyEntry {
    BodyEntry {
        name: "Sun".to_string(),
        radius: SUN_RADIUS,
        orbit_distance: 0.0,
        angular_speed: 0.0,
        initial_angle: 0.0,
        axial_tilt: 0.0,
        material: MaterialKind::Sun,
        color: HexColor(0xffd54d),
        glow: None,
        ring_inner: None,
        ring_outer: None,
    }
}

pub fn planet_entries() -> Vec<BodyEntry> {
    PLANETS.iter().map(Planet::entry).collect()
}

/// The star and the eight planets.
pub fn builtin() -> ConfigResult<SolarSystemConfig> {
    SolarSystemConfig::from_entries(star_entry(), planet_entries())
}
