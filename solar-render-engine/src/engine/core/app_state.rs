use bevy::prelude::*;

/// Scene lifecycle. `Loading` resolves the body list, `Mounted` owns the
/// frame loop and the spawned hierarchy, `Unmounted` holds neither.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Mounted,
    Unmounted,
}

#[derive(Component)]
pub struct FpsText;

pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        if let (Some(exited), Some(entered)) = (transition.exited, transition.entered) {
            info!("→ {exited:?} to {entered:?}");
        }
    }
}

/// Space toggles the scene on native builds, for exercising teardown.
#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_mount_on_space(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    match state.get() {
        AppState::Mounted => next_state.set(AppState::Unmounted),
        AppState::Unmounted => next_state.set(AppState::Mounted),
        AppState::Loading => {}
    }
}
