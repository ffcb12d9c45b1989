//! Declarative scene layout built once from the body list.
//!
//! The blueprint is plain data so the hierarchy can be checked without a
//! running app; `spawn` turns it into entities.

use constants::scene::{
    ATMOSPHERE_BODY_INDEX, ATMOSPHERE_COLOR, ATMOSPHERE_SHELL_OPACITY, ATMOSPHERE_SHELL_SCALE,
    GLOW_SHELL_OPACITY, GLOW_SHELL_SCALE, ORBIT_GUIDE_HALF_WIDTH, ORBIT_GUIDE_OPACITY,
    PLANET_RING_COLOR, PLANET_RING_OPACITY, STAR_LIGHT_COLOR,
};

use super::body_config::{CelestialBodyConfig, SolarSystemConfig};
use super::starfield::StarfieldSpec;
use crate::engine::materials::MaterialKind;

/// How a body's surface is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSpec {
    Procedural(MaterialKind),
    Fallback(u32),
}

impl SurfaceSpec {
    fn resolve(config: &CelestialBodyConfig) -> Self {
        let kind = config.material_kind();
        if kind.is_procedural() {
            SurfaceSpec::Procedural(kind)
        } else {
            SurfaceSpec::Fallback(config.fallback_color())
        }
    }
}

/// Flat annulus in the orbital plane, radii in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner: f32,
    pub outer: f32,
    pub color: u32,
    pub opacity: f32,
}

/// Additive translucent sphere around a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSpec {
    pub radius: f32,
    pub color: u32,
    pub opacity: f32,
}

/// Unitless intensities; converted to Bevy light units at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Ambient and hemisphere lights, summed into one ambient term.
    pub ambient: f32,
    pub star_color: u32,
    pub star_intensity: f32,
    pub key_position: [f32; 3],
    pub key_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        // Two ambient lights (0.7, 1.5) plus the average of two hemisphere
        // lights (0.6, 1.0), each counting half its sky and ground.
        Self {
            ambient: 0.7 + 1.5 + 0.5 * 0.6 + 0.5 * 1.0,
            star_color: STAR_LIGHT_COLOR,
            star_intensity: 10.0,
            key_position: [10.0, 10.0, 5.0],
            key_intensity: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarNode {
    pub name: String,
    pub radius: f32,
    pub surface: SurfaceSpec,
}

/// Everything attached to one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyGroup {
    pub index: usize,
    pub name: String,
    pub radius: f32,
    pub surface: SurfaceSpec,
    pub orbit_guide: RingSpec,
    pub glow: Option<ShellSpec>,
    pub ring: Option<RingSpec>,
    pub atmosphere: Option<ShellSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlueprint {
    pub star: StarNode,
    pub lights: LightRig,
    pub starfield: StarfieldSpec,
    pub bodies: Vec<BodyGroup>,
}

impl SceneBlueprint {
    pub fn ring_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.ring.is_some()).count()
    }
}

fn compose_body(index: usize, config: &CelestialBodyConfig) -> BodyGroup {
    let radius = config.radius();
    let distance = config.orbit_distance();

    BodyGroup {
        index,
        name: config.name().to_string(),
        radius,
        surface: SurfaceSpec::resolve(config),
        orbit_guide: RingSpec {
            inner: (distance - ORBIT_GUIDE_HALF_WIDTH).max(0.0),
            outer: distance + ORBIT_GUIDE_HALF_WIDTH,
            color: 0xffffff,
            opacity: ORBIT_GUIDE_OPACITY,
        },
        glow: config.glow_color().map(|color| ShellSpec {
            radius: radius * GLOW_SHELL_SCALE,
            color,
            opacity: GLOW_SHELL_OPACITY,
        }),
        ring: config.ring().map(|bounds| RingSpec {
            inner: radius * bounds.inner,
            outer: radius * bounds.outer,
            color: PLANET_RING_COLOR,
            opacity: PLANET_RING_OPACITY,
        }),
        atmosphere: (index == ATMOSPHERE_BODY_INDEX).then(|| ShellSpec {
            radius: radius * ATMOSPHERE_SHELL_SCALE,
            color: ATMOSPHERE_COLOR,
            opacity: ATMOSPHERE_SHELL_OPACITY,
        }),
    }
}

/// Lay out the star group and one group per body, in configuration order.
pub fn compose(config: &SolarSystemConfig) -> SceneBlueprint {
    let star = config.star();
    SceneBlueprint {
        star: StarNode {
            name: star.name().to_string(),
            radius: star.radius(),
            surface: SurfaceSpec::resolve(star),
        },
        lights: LightRig::default(),
        starfield: StarfieldSpec::default(),
        bodies: config
            .bodies()
            .iter()
            .enumerate()
            .map(|(index, body)| compose_body(index, body))
            .collect(),
    }
}
