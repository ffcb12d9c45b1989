// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{PowerPreference, RenderCreation, WgpuSettings};
use bevy::render::view::{ColorGrading, ColorGradingGlobal};
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{
    CAMERA_FAR_PLANE, CAMERA_FOV_DEGREES, INITIAL_CAMERA_POSITION, MSAA_SAMPLES,
    TONE_MAPPING_EXPOSURE,
};

// Crate engine modules
use crate::engine::assets::manifest::{
    ManifestLoader, SolarSystemManifest, resolve_configuration, start_loading,
};
use crate::engine::camera::{SolarCamera, sync_camera};
use crate::engine::core::app_state::{AppState, FpsText, log_state_transitions};
use crate::engine::core::window_config::create_window_config;
use crate::engine::frame_loop::{FrameLoop, drive_frame_loop};
use crate::engine::materials::surface_material::PlanetSurfaceMaterial;
use crate::engine::scene::spawn::{
    mount_scene, sync_body_transforms, sync_surface_materials, unmount_scene,
};
use crate::engine::systems::fps_tracking::fps_log_system;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::toggle_mount_on_space;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

/// Build the app. `device_pixel_ratio` is the clamped ratio from the web
/// mount, `None` on native.
pub fn create_app(device_pixel_ratio: Option<f32>) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(device_pixel_ratio))
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<PlanetSurfaceMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SolarSystemManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SolarSystemManifest>::new(&["json"]))
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(AmbientLight::NONE);

    app.init_resource::<ManifestLoader>()
        .init_resource::<FrameLoop>();

    // Loading resolves the body list, then mounts.
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            resolve_configuration.run_if(in_state(AppState::Loading)),
        );

    // Mount registers the frame callback and spawns; unmount reverses both.
    app.add_systems(OnEnter(AppState::Mounted), mount_scene)
        .add_systems(OnExit(AppState::Mounted), unmount_scene);

    // Frame order: step the state (orbit, camera, materials), then copy it out.
    app.add_systems(
        Update,
        (
            drive_frame_loop,
            (sync_body_transforms, sync_camera, sync_surface_materials),
        )
            .chain()
            .run_if(in_state(AppState::Mounted)),
    );

    app.add_systems(Update, (fps_log_system, log_state_transitions));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, (fps_text_update_system, toggle_mount_on_space));
    }

    app
}

fn msaa_from_samples(samples: u32) -> Msaa {
    match samples {
        0 | 1 => Msaa::Off,
        2 => Msaa::Sample2,
        8 => Msaa::Sample8,
        _ => Msaa::Sample4,
    }
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            far: CAMERA_FAR_PLANE,
            ..default()
        }),
        Tonemapping::AcesFitted,
        ColorGrading {
            global: ColorGradingGlobal {
                exposure: TONE_MAPPING_EXPOSURE.log2(),
                ..default()
            },
            ..default()
        },
        msaa_from_samples(MSAA_SAMPLES),
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        SolarCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.85, 1.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins(device_pixel_ratio: Option<f32>) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(device_pixel_ratio)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let render_config = RenderPlugin {
        render_creation: RenderCreation::Automatic(WgpuSettings {
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(render_config)
}
