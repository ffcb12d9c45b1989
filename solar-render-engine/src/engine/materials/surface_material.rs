use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};

use super::MaterialUniformSet;

const SHADER_PATH: &str = "shaders/planet_surface.wgsl";

/// Uniform block read by `planet_surface.wgsl`. Colours are linear RGB in
/// `xyz`; `w` is unused.
#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct PlanetSurfaceUniform {
    pub time: f32,
    pub program: u32,
    pub colors: [Vec4; 4],
}

impl From<&MaterialUniformSet> for PlanetSurfaceUniform {
    fn from(uniforms: &MaterialUniformSet) -> Self {
        let palette = uniforms.palette();
        Self {
            time: uniforms.elapsed_time(),
            program: uniforms.program_id(),
            colors: palette.slots().map(|c| c.extend(1.0)),
        }
    }
}

/// GPU side of a procedural surface. One asset per body so each keeps its
/// own clock.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PlanetSurfaceMaterial {
    #[uniform(0)]
    pub params: PlanetSurfaceUniform,
}

impl PlanetSurfaceMaterial {
    pub fn new(uniforms: &MaterialUniformSet) -> Self {
        Self {
            params: uniforms.into(),
        }
    }

    /// Only the time uniform changes after construction.
    pub fn sync_time(&mut self, uniforms: &MaterialUniformSet) {
        self.params.time = uniforms.elapsed_time();
    }
}

impl Material for PlanetSurfaceMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    // The shader needs object-space position and normal only.
    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::materials::MaterialKind;

    #[test]
    fn test_uniform_mirrors_host_state() {
        let mut uniforms = MaterialUniformSet::new(MaterialKind::Neptune).unwrap();
        uniforms.advance(1.5);

        let mut material = PlanetSurfaceMaterial::new(&uniforms);
        assert_eq!(material.params.program, uniforms.program_id());
        assert_eq!(material.params.time, 1.5);
        assert_eq!(material.params.colors[1].truncate(), uniforms.palette().color(1));

        uniforms.advance(0.5);
        material.sync_time(&uniforms);
        assert_eq!(material.params.time, 2.0);
    }
}
