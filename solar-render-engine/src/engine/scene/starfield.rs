//! Deterministic background starfield.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::starfield::{
    STAR_BASE_SIZE, STAR_COUNT, STAR_SATURATION, STAR_SHELL_DEPTH, STAR_SHELL_RADIUS,
    STAR_SIZE_FACTOR,
};

use crate::engine::noise::hash3;

#[derive(Component)]
pub struct Starfield;

/// Shell the stars are scattered through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldSpec {
    pub count: usize,
    pub radius: f32,
    pub depth: f32,
    pub size_factor: f32,
    pub saturation: f32,
}

impl Default for StarfieldSpec {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius: STAR_SHELL_RADIUS,
            depth: STAR_SHELL_DEPTH,
            size_factor: STAR_SIZE_FACTOR,
            saturation: STAR_SATURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub color: Vec3,
}

/// Hash-driven random value for star `index`, channel `channel`.
fn random(index: usize, channel: f32) -> f32 {
    hash3(Vec3::new(index as f32 * 0.731, channel * 19.19, index as f32 * 0.113 + channel))
}

/// Scatter `spec.count` stars uniformly over directions and through the
/// shell depth. The same `StarfieldSpec` always yields the same field.
pub fn generate_stars(spec: &StarfieldSpec) -> Vec<Star> {
    (0..spec.count)
        .map(|i| {
            let z = random(i, 1.0) * 2.0 - 1.0;
            let theta = random(i, 2.0) * std::f32::consts::TAU;
            let r = (1.0 - z * z).sqrt();
            let direction = Vec3::new(r * theta.cos(), z, r * theta.sin());
            let distance = spec.radius + random(i, 3.0) * spec.depth;

            let brightness = 0.5 + 0.5 * random(i, 4.0);
            let grey = Vec3::splat(brightness);
            let hue = Color::hsl(random(i, 5.0) * 360.0, 1.0, 0.5).to_linear();
            let tinted = Vec3::new(hue.red, hue.green, hue.blue) * brightness;

            Star {
                position: direction * distance,
                size: STAR_BASE_SIZE * spec.size_factor * (0.5 + random(i, 6.0)),
                color: grey.lerp(tinted, spec.saturation),
            }
        })
        .collect()
}

const OCTAHEDRON: [Vec3; 6] = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [4, 2, 1],
    [1, 2, 5],
    [5, 2, 0],
    [4, 3, 0],
    [1, 3, 4],
    [5, 3, 1],
    [0, 3, 5],
];

/// Merge every star into one octahedron mesh with per-vertex colours.
pub fn create_starfield_mesh(stars: &[Star]) -> Mesh {
    let mut positions = Vec::with_capacity(stars.len() * OCTAHEDRON.len());
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut colors = Vec::with_capacity(positions.capacity());
    let mut indices = Vec::with_capacity(stars.len() * OCTAHEDRON_FACES.len() * 3);

    for (i, star) in stars.iter().enumerate() {
        let base = (i * OCTAHEDRON.len()) as u32;
        for corner in OCTAHEDRON {
            positions.push((star.position + corner * star.size).to_array());
            normals.push(corner.to_array());
            colors.push(star.color.extend(1.0).to_array());
        }
        for face in OCTAHEDRON_FACES {
            indices.extend(face.iter().map(|v| base + v));
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
