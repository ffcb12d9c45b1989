//! Turns a [`SceneBlueprint`] into entities and keeps them in step with the
//! frame state.

use bevy::prelude::*;
use constants::render_settings::INITIAL_CAMERA_POSITION;
use constants::scene::{
    AMBIENT_BRIGHTNESS_PER_UNIT, ATMOSPHERE_SEGMENTS, BODY_SEGMENTS, DIRECTIONAL_LUX_PER_UNIT,
    FALLBACK_METALNESS, FALLBACK_ROUGHNESS, POINT_LIGHT_LUMENS_PER_UNIT, RING_RESOLUTION,
    SUN_SEGMENTS,
};

use super::body_config::SolarSystemConfig;
use super::composer::{
    BodyGroup, LightRig, RingSpec, SceneBlueprint, ShellSpec, SurfaceSpec, compose,
};
use super::starfield::{Starfield, create_starfield_mesh, generate_stars};
use crate::engine::camera::SolarCamera;
use crate::engine::frame_loop::FrameLoop;
use crate::engine::frame_loop::mount::MountedScene;
use crate::engine::frame_loop::simulation::SolarSystem;
use crate::engine::materials::MaterialUniformSet;
use crate::engine::materials::palette::srgb_hex;
use crate::engine::materials::surface_material::PlanetSurfaceMaterial;

/// Root of everything spawned for one mount; despawned as a whole.
#[derive(Component)]
pub struct SolarSceneRoot;

/// Orbit centre of body `n`; translated every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyPivot(pub usize);

/// Body mesh of body `n`; rotated (tilt and spin) every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySurface(pub usize);

/// Which uniform set a procedural material follows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSlot {
    Star,
    Body(usize),
}

/// Asset stores the spawner writes into.
pub struct SceneAssets<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub standard: &'a mut Assets<StandardMaterial>,
    pub surfaces: &'a mut Assets<PlanetSurfaceMaterial>,
}

fn sphere(assets: &mut SceneAssets, radius: f32, (sectors, stacks): (u32, u32)) -> Handle<Mesh> {
    assets
        .meshes
        .add(Sphere::new(radius).mesh().uv(sectors, stacks))
}

fn fallback_material(assets: &mut SceneAssets, color: u32) -> Handle<StandardMaterial> {
    assets.standard.add(StandardMaterial {
        base_color: srgb_hex(color),
        perceptual_roughness: FALLBACK_ROUGHNESS,
        metallic: FALLBACK_METALNESS,
        ..default()
    })
}

fn translucent_material(
    assets: &mut SceneAssets,
    color: u32,
    opacity: f32,
    alpha_mode: AlphaMode,
    double_sided: bool,
) -> Handle<StandardMaterial> {
    assets.standard.add(StandardMaterial {
        base_color: srgb_hex(color).with_alpha(opacity),
        alpha_mode,
        unlit: true,
        double_sided,
        cull_mode: if double_sided {
            None
        } else {
            Some(bevy::render::render_resource::Face::Back)
        },
        ..default()
    })
}

/// Surface component bundle pieces: procedural when the uniform set exists,
/// flat colour otherwise.
fn spawn_surface(
    entity: &mut EntityCommands,
    assets: &mut SceneAssets,
    surface: SurfaceSpec,
    uniforms: Option<&MaterialUniformSet>,
    slot: SurfaceSlot,
    fallback: u32,
) {
    match (surface, uniforms) {
        (SurfaceSpec::Procedural(_), Some(uniforms)) => {
            let material = assets.surfaces.add(PlanetSurfaceMaterial::new(uniforms));
            entity.insert((MeshMaterial3d(material), slot));
        }
        (SurfaceSpec::Fallback(color), _) => {
            entity.insert(MeshMaterial3d(fallback_material(assets, color)));
        }
        (SurfaceSpec::Procedural(kind), None) => {
            warn!("No surface program state for {kind:?}, drawing flat colour");
            entity.insert(MeshMaterial3d(fallback_material(assets, fallback)));
        }
    }
}

fn ring_mesh(assets: &mut SceneAssets, ring: &RingSpec) -> Handle<Mesh> {
    assets.meshes.add(
        Annulus::new(ring.inner, ring.outer)
            .mesh()
            .resolution(RING_RESOLUTION),
    )
}

/// Annuli are built in the XY plane; this lays them into XZ.
fn flat_ring_transform() -> Transform {
    Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2))
}

fn spawn_shell(
    parent: &mut ChildSpawnerCommands,
    assets: &mut SceneAssets,
    shell: &ShellSpec,
    name: String,
) {
    parent.spawn((
        Name::new(name),
        Mesh3d(sphere(assets, shell.radius, ATMOSPHERE_SEGMENTS)),
        MeshMaterial3d(translucent_material(
            assets,
            shell.color,
            shell.opacity,
            AlphaMode::Add,
            false,
        )),
    ));
}

fn spawn_lights(parent: &mut ChildSpawnerCommands, lights: &LightRig) {
    parent.spawn((
        Name::new("Star light"),
        PointLight {
            color: srgb_hex(lights.star_color),
            intensity: lights.star_intensity * POINT_LIGHT_LUMENS_PER_UNIT,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY,
    ));

    parent.spawn((
        Name::new("Key light"),
        DirectionalLight {
            illuminance: lights.key_intensity * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lights.key_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_body(
    parent: &mut ChildSpawnerCommands,
    assets: &mut SceneAssets,
    group: &BodyGroup,
    system: &SolarSystem,
    fallback: u32,
) {
    let state = &system.bodies()[group.index];

    parent.spawn((
        Name::new(format!("{} orbit", group.name)),
        Mesh3d(ring_mesh(assets, &group.orbit_guide)),
        MeshMaterial3d(translucent_material(
            assets,
            group.orbit_guide.color,
            group.orbit_guide.opacity,
            AlphaMode::Blend,
            true,
        )),
        flat_ring_transform(),
    ));

    parent
        .spawn((
            Name::new(group.name.clone()),
            BodyPivot(group.index),
            state.orbit.pivot_transform(),
            Visibility::default(),
        ))
        .with_children(|pivot| {
            let mut surface = pivot.spawn((
                Name::new(format!("{} surface", group.name)),
                BodySurface(group.index),
                Mesh3d(sphere(assets, group.radius, BODY_SEGMENTS)),
                Transform::from_rotation(state.orbit.rotation()),
            ));
            spawn_surface(
                &mut surface,
                assets,
                group.surface,
                state.surface.as_ref(),
                SurfaceSlot::Body(group.index),
                fallback,
            );

            if let Some(ring) = &group.ring {
                let mesh = ring_mesh(assets, ring);
                let material =
                    translucent_material(assets, ring.color, ring.opacity, AlphaMode::Blend, true);
                surface.with_children(|body| {
                    body.spawn((
                        Name::new(format!("{} ring", group.name)),
                        Mesh3d(mesh),
                        MeshMaterial3d(material),
                        flat_ring_transform(),
                    ));
                });
            }

            if let Some(glow) = &group.glow {
                spawn_shell(pivot, assets, glow, format!("{} glow", group.name));
            }
            if let Some(atmosphere) = &group.atmosphere {
                spawn_shell(pivot, assets, atmosphere, format!("{} atmosphere", group.name));
            }
        });
}

/// Spawn the whole hierarchy under one root and return the root.
pub fn spawn_scene(
    commands: &mut Commands,
    assets: &mut SceneAssets,
    blueprint: &SceneBlueprint,
    config: &SolarSystemConfig,
    system: &SolarSystem,
) -> Entity {
    let stars = generate_stars(&blueprint.starfield);
    let starfield_mesh = assets.meshes.add(create_starfield_mesh(&stars));
    let starfield_material = assets.standard.add(StandardMaterial {
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Name::new("Solar system"),
            SolarSceneRoot,
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|root| {
            let mut star = root.spawn((
                Name::new(blueprint.star.name.clone()),
                Mesh3d(sphere(assets, blueprint.star.radius, SUN_SEGMENTS)),
                Transform::IDENTITY,
            ));
            spawn_surface(
                &mut star,
                assets,
                blueprint.star.surface,
                system.star_surface(),
                SurfaceSlot::Star,
                config.star().fallback_color(),
            );
            star.with_children(|group| spawn_lights(group, &blueprint.lights));

            root.spawn((
                Name::new("Starfield"),
                Starfield,
                Mesh3d(starfield_mesh),
                MeshMaterial3d(starfield_material),
                Transform::IDENTITY,
            ));

            for (group, body) in blueprint.bodies.iter().zip(config.bodies()) {
                spawn_body(root, assets, group, system, body.fallback_color());
            }
        })
        .id()
}

/// `OnEnter(Mounted)`: fresh frame state, fresh entities.
pub fn mount_scene(
    mut commands: Commands,
    config: Res<SolarSystemConfig>,
    mut frame_loop: ResMut<FrameLoop>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard: ResMut<Assets<StandardMaterial>>,
    mut surfaces: ResMut<Assets<PlanetSurfaceMaterial>>,
    mut cameras: Query<&mut Transform, With<SolarCamera>>,
) {
    let scene = MountedScene::mount(&config, INITIAL_CAMERA_POSITION, &mut *frame_loop);

    for mut transform in &mut cameras {
        *transform =
            Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y);
    }

    let blueprint = compose(&config);
    let mut assets = SceneAssets {
        meshes: meshes.as_mut(),
        standard: standard.as_mut(),
        surfaces: surfaces.as_mut(),
    };
    spawn_scene(&mut commands, &mut assets, &blueprint, &config, scene.system());

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: blueprint.lights.ambient * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });

    info!(
        "Scene mounted: {} bodies, {} ring(s), {} stars",
        blueprint.bodies.len(),
        blueprint.ring_count(),
        blueprint.starfield.count
    );
    commands.insert_resource(scene);
}

/// `OnExit(Mounted)`: release the frame registration, then the entities.
pub fn unmount_scene(world: &mut World) {
    if let Some(scene) = world.remove_resource::<MountedScene>() {
        let mut frame_loop = world.resource_mut::<FrameLoop>();
        let retired = scene.unmount(&mut *frame_loop);
        info!(
            "Scene unmounted after {} frames, {} frame callback(s) left",
            retired.frames(),
            frame_loop.registered()
        );
    }

    let roots: Vec<Entity> = world
        .query_filtered::<Entity, With<SolarSceneRoot>>()
        .iter(world)
        .collect();
    for root in roots {
        world.despawn(root);
    }
    world.insert_resource(AmbientLight::NONE);
}

pub fn sync_body_transforms(
    scene: Res<MountedScene>,
    mut pivots: Query<(&BodyPivot, &mut Transform), Without<BodySurface>>,
    mut surfaces: Query<(&BodySurface, &mut Transform), Without<BodyPivot>>,
) {
    let bodies = scene.system().bodies();
    for (BodyPivot(index), mut transform) in &mut pivots {
        if let Some(body) = bodies.get(*index) {
            transform.translation = body.orbit.position();
        }
    }
    for (BodySurface(index), mut transform) in &mut surfaces {
        if let Some(body) = bodies.get(*index) {
            transform.rotation = body.orbit.rotation();
        }
    }
}

pub fn sync_surface_materials(
    scene: Res<MountedScene>,
    slots: Query<(&SurfaceSlot, &MeshMaterial3d<PlanetSurfaceMaterial>)>,
    mut materials: ResMut<Assets<PlanetSurfaceMaterial>>,
) {
    let system = scene.system();
    for (slot, handle) in &slots {
        let uniforms = match slot {
            SurfaceSlot::Star => system.star_surface(),
            SurfaceSlot::Body(index) => system
                .bodies()
                .get(*index)
                .and_then(|body| body.surface.as_ref()),
        };
        if let (Some(uniforms), Some(material)) = (uniforms, materials.get_mut(&handle.0)) {
            material.sync_time(uniforms);
        }
    }
}
