//! Procedural surface programs for the star and the planets.
//!
//! Each program is a pure function of a unit-sphere sample, the material's
//! elapsed time and its palette. The same programs are re-expressed in
//! `assets/shaders/planet_surface.wgsl`; the host versions exist so surfaces
//! can be evaluated and tested without a GPU.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// sRGB hex palettes and conversion into the linear blend space.
pub mod palette;

/// `smoothstep`, `mix`, rim and key-light helpers shared by the programs.
pub mod shading;

/// Bevy `Material` binding the programs to the GPU shader.
pub mod surface_material;

pub mod jupiter;
pub mod mars;
pub mod mercury;
pub mod neptune;
pub mod saturn;
pub mod sun;
pub mod uranus;
pub mod venus;

use palette::Palette;

/// Object-space point on the body and its view-space normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub point: Vec3,
    pub normal: Vec3,
}

impl SurfaceSample {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// Surface family selected per body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Generic,
}

type ShadeFn = fn(&SurfaceSample, f32, &Palette) -> Vec3;

/// One procedural program: its shader branch id, host implementation and
/// construction-time palette.
#[derive(Clone, Copy)]
pub struct SurfaceProgram {
    pub id: u32,
    pub shade: ShadeFn,
    pub palette: &'static [u32],
}

impl std::fmt::Debug for SurfaceProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceProgram")
            .field("id", &self.id)
            .field("palette", &self.palette)
            .finish()
    }
}

impl MaterialKind {
    /// The procedural program for this kind, or `None` for kinds rendered
    /// with a flat fallback colour (Earth and generic bodies).
    pub fn program(self) -> Option<SurfaceProgram> {
        let (id, shade, palette): (u32, ShadeFn, &'static [u32]) = match self {
            MaterialKind::Sun => (0, sun::shade, &sun::PALETTE),
            MaterialKind::Mercury => (1, mercury::shade, &mercury::PALETTE),
            MaterialKind::Venus => (2, venus::shade, &venus::PALETTE),
            MaterialKind::Mars => (3, mars::shade, &mars::PALETTE),
            MaterialKind::Jupiter => (4, jupiter::shade, &jupiter::PALETTE),
            MaterialKind::Saturn => (5, saturn::shade, &saturn::PALETTE),
            MaterialKind::Uranus => (6, uranus::shade, &uranus::PALETTE),
            MaterialKind::Neptune => (7, neptune::shade, &neptune::PALETTE),
            MaterialKind::Earth | MaterialKind::Generic => return None,
        };
        Some(SurfaceProgram { id, shade, palette })
    }

    pub fn is_procedural(self) -> bool {
        self.program().is_some()
    }
}

/// Per-material uniforms: monotonic elapsed time and a palette fixed at
/// construction.
///
/// Time accumulates in `f64` and is narrowed only when read, so a page left
/// open for days keeps advancing by the true frame delta.
#[derive(Debug, Clone, Copy)]
pub struct MaterialUniformSet {
    kind: MaterialKind,
    program: SurfaceProgram,
    elapsed_time: f64,
    palette: Palette,
}

impl MaterialUniformSet {
    /// Fresh uniforms with the kind's built-in palette, `None` for
    /// non-procedural kinds.
    pub fn new(kind: MaterialKind) -> Option<Self> {
        let program = kind.program()?;
        Some(Self {
            kind,
            program,
            elapsed_time: 0.0,
            palette: Palette::from_hex(program.palette),
        })
    }

    /// Advance time by the frame delta. Negative or non-finite deltas are
    /// ignored so time never runs backwards.
    pub fn advance(&mut self, delta_secs: f32) {
        if delta_secs.is_finite() && delta_secs > 0.0 {
            self.elapsed_time += f64::from(delta_secs);
        }
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn program_id(&self) -> u32 {
        self.program.id
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time as f32
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Evaluate the program at the current time.
    pub fn shade(&self, sample: &SurfaceSample) -> Vec3 {
        (self.program.shade)(sample, self.elapsed_time(), &self.palette)
    }
}
