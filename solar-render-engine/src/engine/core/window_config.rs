use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

/// Primary window for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_window_config(_device_pixel_ratio: Option<f32>) -> Window {
    Window {
        title: "Solar System".into(),
        present_mode: PresentMode::AutoVsync,
        resolution: WindowResolution::new(1280.0, 720.0),
        ..default()
    }
}

/// Primary window bound to the mount canvas. The canvas follows its
/// container, which covers the viewport; input stays with the page.
/// `None` means the mount surface could not be prepared, so Bevy creates
/// its own canvas.
#[cfg(target_arch = "wasm32")]
pub fn create_window_config(device_pixel_ratio: Option<f32>) -> Window {
    use super::web_mount::canvas_selector;
    use bevy::window::CompositeAlphaMode;

    let resolution = match device_pixel_ratio {
        Some(ratio) => WindowResolution::default().with_scale_factor_override(ratio),
        None => WindowResolution::default(),
    };

    Window {
        canvas: device_pixel_ratio.map(|_| canvas_selector()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        transparent: true,
        composite_alpha_mode: CompositeAlphaMode::PreMultiplied,
        present_mode: PresentMode::AutoVsync,
        resolution,
        ..default()
    }
}
