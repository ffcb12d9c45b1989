use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::FpsText;

const FPS_LOG_INTERVAL_SECS: f32 = 10.0;

pub fn fps_log_system(
    diagnostics: Res<DiagnosticsStore>,
    mut last_log_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    if current_time - *last_log_time >= FPS_LOG_INTERVAL_SECS {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                info!("FPS: {value:.1}");
                *last_log_time = current_time;
            }
        }
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
